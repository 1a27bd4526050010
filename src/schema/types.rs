// src/schema/types.rs

use serde::Serialize;

/// One output row in the canonical schema.
///
/// `None` marks a source column that was absent from the scraped table.
#[derive(Debug, Serialize, PartialEq, Clone, Eq, Default)]
pub struct OddsRecord {
    pub game_id: String,
    pub game_detail: Option<String>,
    pub date: Option<String>,
    pub opening_total_line: Option<String>,
    pub opening_result: Option<String>,
    pub closing_total_line: Option<String>,
    pub closing_result: Option<String>,
    pub game_total: Option<String>,
}

impl OddsRecord {
    /// Output column names, in field order.
    pub const COLUMNS: [&'static str; 8] = [
        "game_id",
        "game_detail",
        "date",
        "opening_total_line",
        "opening_result",
        "closing_total_line",
        "closing_result",
        "game_total",
    ];
}
