// src/teams.rs

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Source abbreviations that differ from the canonical code.
///
/// Only the known exceptions are listed; every other token is assumed to be
/// canonical already.
static TEAM_CODE_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("LAR", "LA"), ("JAC", "JAX")]));

/// Canonical franchise codes in use between 2007 and 2019, relocations included.
static CANONICAL_CODES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "ARI", "ATL", "BAL", "BUF", "CAR", "CHI", "CIN", "CLE", "DAL", "DEN", "DET", "GB", "HOU",
        "IND", "JAX", "KC", "LA", "LAC", "LV", "MIA", "MIN", "NE", "NO", "NYG", "NYJ", "OAK",
        "PHI", "PIT", "SD", "SEA", "SF", "STL", "TB", "TEN", "WAS",
    ])
});

/// Map a raw team token to its canonical code, passing unknown tokens through.
pub fn normalize_team_code(token: &str) -> &str {
    TEAM_CODE_EXCEPTIONS.get(token).copied().unwrap_or(token)
}

/// Whether `code` is one of the canonical franchise codes.
///
/// Normalization never consults this; it only feeds the drift report.
pub fn is_canonical_code(code: &str) -> bool {
    CANONICAL_CODES.contains(code)
}
