//! Error types for the YUDANE core.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for YUDANE operations.
pub type YudaneResult<T> = Result<T, YudaneError>;

/// Errors that can occur while running the shrine.
#[derive(Debug, Error)]
pub enum YudaneError {
    /// Reading or writing a persisted entry failed.
    #[error("storage error at {}: {source}", path.display())]
    Storage {
        /// File that could not be accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A record could not be encoded or decoded as JSON.
    #[error("invalid record: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be parsed.
    #[error("invalid config {}: {source}", path.display())]
    Config {
        /// Config file path.
        path: PathBuf,
        /// Parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Today's ritual has already been performed.
    #[error("the oracle for {0} has already been revealed")]
    AlreadySealed(NaiveDate),

    /// A date string could not be parsed.
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// No platform data directory could be determined.
    #[error("could not determine a data directory")]
    NoDataDir,
}
