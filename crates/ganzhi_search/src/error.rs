//! Error types for chart and luck-cycle orchestration.

use ganzhi_base::BaseError;
use ganzhi_core::DataError;
use ganzhi_time::TimeError;
use thiserror::Error;

/// Errors from provider-backed chart operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error(transparent)]
    Base(#[from] BaseError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Data(#[from] DataError),
}
