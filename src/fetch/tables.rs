// src/fetch/tables.rs
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use crate::process::RawTable;

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").expect("table selector"));
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("row selector"));
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("th, td").expect("cell selector"));
static DATA_CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("td selector"));
static HEAD: Lazy<Selector> = Lazy::new(|| Selector::parse("thead").expect("thead selector"));

/// Parse every `<table>` in `html`, in document order.
///
/// The header is the first `<thead>` row whatever its cell tags, or, without
/// a `<thead>`, the first row made only of `<th>` cells. Every other row with
/// at least one `<td>` is a body row. A table without a header row gets
/// positional headers `"0"`, `"1"`, …
///
/// Nested tables are returned as tables of their own, and their rows also
/// count toward the enclosing table, so each one takes a season position.
pub fn parse_tables(html: &str) -> Vec<RawTable> {
    let doc = Html::parse_document(html);
    doc.select(&TABLE).map(parse_table).collect()
}

fn parse_table(table: ElementRef<'_>) -> RawTable {
    let has_head = table.select(&HEAD).next().is_some();
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for tr in table.select(&ROW) {
        let cells: Vec<String> = tr.select(&CELL).map(cell_text).collect();
        if cells.is_empty() {
            continue;
        }
        if in_head(tr) {
            if headers.is_none() {
                headers = Some(cells);
            }
            continue;
        }
        let has_data = tr.select(&DATA_CELL).next().is_some();
        if !has_data {
            if headers.is_none() && !has_head {
                headers = Some(cells);
            }
            continue;
        }
        rows.push(cells);
    }

    let headers = headers.unwrap_or_else(|| {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..width).map(|i| i.to_string()).collect()
    });
    trace!(columns = headers.len(), rows = rows.len(), "parsed table");
    RawTable::new(headers, rows)
}

fn in_head(tr: ElementRef<'_>) -> bool {
    tr.parent()
        .and_then(ElementRef::wrap)
        .is_some_and(|parent| parent.value().name() == "thead")
}

/// Visible text of a cell with whitespace runs collapsed to one space.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
