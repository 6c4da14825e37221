//! Types for chart analysis results.

use std::collections::BTreeMap;

use ganzhi_base::{
    ChartBreakdown, CombinationReport, ElementTally, FourPillars, Stem, TenGod,
    TenGodDistribution, TenGodRelation,
};
use serde::Serialize;

/// Ten gods of the hidden stems of each branch, keyed by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HiddenTenGods {
    pub year: Vec<(Stem, TenGodRelation)>,
    pub month: Vec<(Stem, TenGodRelation)>,
    pub day: Vec<(Stem, TenGodRelation)>,
    pub hour: Vec<(Stem, TenGodRelation)>,
}

/// Every derived classification of one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartReport {
    pub pillars: FourPillars,
    pub day_master: Stem,
    /// Tally over the 8 visible stems and branches.
    pub wuxing: ElementTally,
    /// Tally including hidden stems.
    pub wuxing_full: ElementTally,
    pub breakdown: ChartBreakdown,
    pub combinations: CombinationReport,
    pub ten_gods: TenGodDistribution,
    pub hidden_ten_gods: HiddenTenGods,
    pub ten_god_frequency: BTreeMap<TenGod, u32>,
}
