//! Error types for civil-time parsing and arithmetic.

use thiserror::Error;

/// Errors from timestamp parsing or calendar arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Input string is not a recognised date-time layout.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// Date arithmetic left the representable calendar range.
    #[error("date out of range: {0}")]
    OutOfRange(&'static str),
}
