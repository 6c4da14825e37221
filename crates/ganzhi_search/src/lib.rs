//! Chart orchestration over solar-term providers.
//!
//! This crate provides:
//! - Four pillars for a timestamp, with terms taken from a provider
//! - A full chart report: element tallies, breakdown, combinations, ten gods
//! - Luck-cycle direction, starting offset and schedules over a 3-year
//!   Jie-term window

pub mod chart;
pub mod chart_types;
pub mod error;
pub mod luck;
pub mod luck_types;

pub use chart::{analyze_chart, chart_report_for, four_pillars_for, four_pillars_for_str};
pub use chart_types::{ChartReport, HiddenTenGods};
pub use error::SearchError;
pub use luck::{direction, generate, jie_window, luck_schedule, starting_offset};
pub use luck_types::{DEFAULT_LUCK_CYCLES, LuckSchedule};
