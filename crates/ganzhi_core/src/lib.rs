//! Data providers consumed by chart calculations.
//!
//! Solar-term instants and solar/lunar calendar pairs are precomputed
//! datasets. This crate defines the provider traits and table-backed
//! implementations loaded from JSON. Providers are read-only after
//! construction and safe to share across threads.

pub mod calendar;
pub mod error;
pub mod solar_terms;

pub use calendar::{CalendarLookup, TableCalendar};
pub use error::DataError;
pub use solar_terms::{SolarTermProvider, TableSolarTerms};
