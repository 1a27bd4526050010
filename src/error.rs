// src/error.rs

use thiserror::Error;

/// Failures that would corrupt game ids if they were swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    #[error("no season mapped for table position {0} (positions 0..=12 only)")]
    UnknownSeasonPosition(usize),
    #[error("unknown postseason round {0:?}")]
    UnknownRound(String),
    #[error("descriptor {descriptor:?} has {separators} '@' separators, expected exactly 1")]
    MalformedDescriptor {
        descriptor: String,
        separators: usize,
    },
    #[error("table has no {0:?} column")]
    MissingColumn(String),
}
