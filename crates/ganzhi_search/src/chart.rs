//! Chart orchestration: bridges a solar-term provider with the pure pillar
//! and classification functions in ganzhi_base.

use ganzhi_base::{
    FourPillars, analyze_wuxing_full, analyze_wuxing_simple, breakdown, detect_combinations,
    four_pillars, resolve_hidden, ten_god_distribution, ten_god_frequency,
};
use ganzhi_core::SolarTermProvider;
use ganzhi_time::CivilTime;
use tracing::debug;

use crate::chart_types::{ChartReport, HiddenTenGods};
use crate::error::SearchError;

/// Four pillars of `at`, using the Jie terms of its civil year.
pub fn four_pillars_for(
    provider: &dyn SolarTermProvider,
    at: &CivilTime,
) -> Result<FourPillars, SearchError> {
    let terms = provider.terms(at.year(), true)?;
    let chart = four_pillars(at, &terms)?;
    debug!(%at, %chart, "four pillars");
    Ok(chart)
}

/// Parse a timestamp and compute its four pillars.
pub fn four_pillars_for_str(
    provider: &dyn SolarTermProvider,
    at: &str,
) -> Result<FourPillars, SearchError> {
    let at: CivilTime = at.parse()?;
    four_pillars_for(provider, &at)
}

/// All classifications of an existing chart.
pub fn analyze_chart(chart: &FourPillars) -> ChartReport {
    let dm = chart.day_master();
    ChartReport {
        pillars: *chart,
        day_master: dm,
        wuxing: analyze_wuxing_simple(chart),
        wuxing_full: analyze_wuxing_full(chart),
        breakdown: breakdown(chart),
        combinations: detect_combinations(chart),
        ten_gods: ten_god_distribution(chart),
        hidden_ten_gods: HiddenTenGods {
            year: resolve_hidden(dm, chart.year.branch),
            month: resolve_hidden(dm, chart.month.branch),
            day: resolve_hidden(dm, chart.day.branch),
            hour: resolve_hidden(dm, chart.hour.branch),
        },
        ten_god_frequency: ten_god_frequency(chart),
    }
}

/// Four pillars and full analysis for a timestamp.
pub fn chart_report_for(
    provider: &dyn SolarTermProvider,
    at: &CivilTime,
) -> Result<ChartReport, SearchError> {
    Ok(analyze_chart(&four_pillars_for(provider, at)?))
}
