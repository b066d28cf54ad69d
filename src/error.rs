use thiserror::Error;

use crate::spell::SpellError;

#[derive(Error, Debug)]
pub enum WordLengthError {
    /// Scan bounds with `start >= stop`.
    #[error("invalid range: start {start} must be below stop {stop}")]
    InvalidRange { start: u64, stop: u64 },

    /// Failure reported by the speller, passed through untouched.
    #[error("spelling error: {0}")]
    Spelling(#[from] SpellError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
