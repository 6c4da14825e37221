//! Error types for provider data loading.

use ganzhi_time::TimeError;
use thiserror::Error;

/// Errors from loading or decoding provider tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DataError {
    /// Table file could not be read.
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
    /// Table is not valid JSON of the expected shape.
    #[error("invalid table JSON: {0}")]
    Json(String),
    /// A year key is not an integer.
    #[error("invalid year key: {0}")]
    InvalidYear(String),
    /// A term name is not one of the 24 canonical names.
    #[error("unknown solar term name: {0}")]
    UnknownTerm(String),
    /// A timestamp in the table could not be parsed.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
