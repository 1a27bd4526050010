// src/process/mod.rs
pub mod raw_table;

pub use raw_table::RawTable;

use tracing::trace;

use crate::{error::ScrapeError, game_id::GameId};

/// Source column holding the `"AWAY @ HOME"` descriptor.
pub const DESCRIPTOR_COLUMN: &str = "Home Team ID";
/// Column added to every table by [`annotate_table`].
pub const GAME_ID_COLUMN: &str = "game_id";

/// Attach a `game_id` column to `table` for the given season and week.
///
/// An existing `game_id` column is overwritten in place. Returns the parsed
/// ids in row order. Any malformed descriptor fails the whole table. A table
/// with no rows needs no descriptor column. Rows are fitted to the header
/// width first, so a missing descriptor cell reads as empty.
pub fn annotate_table(
    table: &mut RawTable,
    season: u16,
    week: u8,
) -> Result<Vec<GameId>, ScrapeError> {
    table.fit_rows();
    let ids = match table.column_index(DESCRIPTOR_COLUMN) {
        Some(idx) => table
            .rows
            .iter()
            .map(|row| GameId::from_descriptor(&row[idx], season, week))
            .collect::<Result<Vec<_>, _>>()?,
        None if table.is_empty() => Vec::new(),
        None => return Err(ScrapeError::MissingColumn(DESCRIPTOR_COLUMN.to_string())),
    };

    let id_idx = match table.column_index(GAME_ID_COLUMN) {
        Some(idx) => idx,
        None => {
            table.headers.push(GAME_ID_COLUMN.to_string());
            table.rows.iter_mut().for_each(|row| row.push(String::new()));
            table.headers.len() - 1
        }
    };
    for (row, id) in table.rows.iter_mut().zip(&ids) {
        trace!(game_id = %id, "annotated");
        row[id_idx] = id.to_string();
    }

    Ok(ids)
}
