pub mod types;
pub mod write;

pub use types::OddsRecord;
pub use write::write_records;

use std::collections::HashMap;

use crate::process::{RawTable, GAME_ID_COLUMN};

/// Source header → canonical column. Headers not listed here are dropped.
pub static COLUMN_MAP: &[(&str, &str)] = &[
    (GAME_ID_COLUMN, "game_id"),
    ("Home Team ID", "game_detail"),
    ("Date", "date"),
    ("Opening Total", "opening_total_line"),
    ("Opening Result", "opening_result"),
    ("Closing Total", "closing_total_line"),
    ("Closing Result", "closing_result"),
    ("Game Total", "game_total"),
];

/// Canonical name for a source header, if it is kept.
pub fn canonical_name(header: &str) -> Option<&'static str> {
    COLUMN_MAP
        .iter()
        .find(|(raw, _)| *raw == header)
        .map(|(_, canonical)| *canonical)
}

/// Rename every annotated table to the canonical schema and concatenate the
/// rows, keeping table order and row order.
pub fn rename_columns(tables: &[RawTable]) -> Vec<OddsRecord> {
    tables.iter().flat_map(rename_table).collect()
}

fn rename_table(table: &RawTable) -> Vec<OddsRecord> {
    // canonical name → source index; first matching header wins
    let mut index: HashMap<&'static str, usize> = HashMap::new();
    for (i, header) in table.headers.iter().enumerate() {
        if let Some(name) = canonical_name(header) {
            index.entry(name).or_insert(i);
        }
    }

    table
        .rows
        .iter()
        .map(|row| {
            // a cell past the end of a short row reads as empty
            let field = |name: &str| {
                index
                    .get(name)
                    .map(|&i| row.get(i).cloned().unwrap_or_default())
            };
            OddsRecord {
                game_id: field("game_id").unwrap_or_default(),
                game_detail: field("game_detail"),
                date: field("date"),
                opening_total_line: field("opening_total_line"),
                opening_result: field("opening_result"),
                closing_total_line: field("closing_total_line"),
                closing_result: field("closing_result"),
                game_total: field("game_total"),
            }
        })
        .collect()
}
