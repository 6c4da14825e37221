//! Local civil timestamps for sexagenary chart computation.
//!
//! This crate provides:
//! - `CivilTime`, the canonical timestamp accepted by every chart operation
//! - Parsing of the supported date-time string layouts
//! - Minute/day differences and year-month-day advancement used by the
//!   luck-cycle scheduler

pub mod civil_time;
pub mod error;

pub use civil_time::CivilTime;
pub use error::TimeError;

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: i64 = 1_440;
