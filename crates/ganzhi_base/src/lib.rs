//! Pure sexagenary calculations for Four Pillars charts.
//!
//! This crate provides:
//! - Stems, branches, hidden stems and the 60-pillar cycle
//! - Year, month, day and hour pillars from solar-term boundaries
//! - Five-element tallies, per-pillar breakdowns and branch combinations
//! - Ten-god relations against the day master
//! - Luck-cycle direction, starting age and decade pillars
//!
//! Nothing here does I/O; solar-term instants are supplied by the caller.

pub mod branch;
pub mod combination;
pub mod element;
pub mod error;
pub mod luck;
pub mod pillar;
pub mod pillars;
pub mod solar_term;
pub mod stem;
pub mod ten_god;
pub mod wuxing;

pub use branch::{ALL_BRANCHES, BRANCH_COUNT, Branch};
pub use combination::{
    CombinationKind, CombinationReport, CombinationRule, SecondaryCombinations,
    detect_combinations, find_combinations,
};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::BaseError;
pub use luck::{
    CycleTenGods, Gender, LuckCycle, LuckDirection, StartingOffset, direction, luck_cycles,
    starting_offset,
};
pub use pillar::{FourPillars, Pillar, PillarPosition, SEXAGENARY_CYCLE};
pub use pillars::{day_pillar, four_pillars, hour_pillar, month_pillar, year_pillar};
pub use solar_term::{ALL_SOLAR_TERMS, JIE_TERMS, SolarTerm, SolarTermSet};
pub use stem::{ALL_STEMS, STEM_COUNT, Stem};
pub use ten_god::{
    TenGod, TenGodDistribution, TenGodRelation, resolve, resolve_hidden, ten_god_distribution,
    ten_god_frequency,
};
pub use wuxing::{
    ChartBreakdown, ElementTally, PillarBreakdown, analyze_wuxing_full, analyze_wuxing_simple,
    breakdown,
};
