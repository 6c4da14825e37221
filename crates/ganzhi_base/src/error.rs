//! Error types for sexagenary chart calculations.

use ganzhi_time::TimeError;
use thiserror::Error;

use crate::solar_term::SolarTerm;

/// Errors from base chart calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// Error from civil-time parsing or arithmetic.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Gender outside the closed male/female set.
    #[error("invalid gender: {0}")]
    InvalidGender(String),
    /// A four-pillar sequence did not contain exactly four pillars.
    #[error("expected 4 pillars, got {0}")]
    InvalidArity(usize),
    /// Stem or branch symbol outside the closed enumerations.
    #[error("invalid stem/branch symbol: {0}")]
    InvalidSymbol(String),
    /// A boundary term needed for the calculation is absent from the term set.
    #[error("solar term {} missing for year {year}", .term.symbol())]
    MissingSolarTerm { term: SolarTerm, year: i32 },
    /// No solar term on the required side of the birth instant.
    #[error("no reference solar term found: {0}")]
    NoReferenceTerm(&'static str),
}
