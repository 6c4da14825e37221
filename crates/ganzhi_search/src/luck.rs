//! Luck-cycle orchestration: bridges a solar-term provider with the pure
//! luck-cycle math in ganzhi_base.
//!
//! The reference term is searched over the Jie terms of the birth year and
//! both neighbouring years, so births near a year boundary always find one.

use ganzhi_base::luck as base_luck;
use ganzhi_base::{FourPillars, Gender, LuckCycle, LuckDirection, SolarTerm, StartingOffset};
use ganzhi_core::SolarTermProvider;
use ganzhi_time::CivilTime;
use tracing::debug;

use crate::chart::four_pillars_for;
use crate::error::SearchError;
use crate::luck_types::LuckSchedule;

/// Jie terms of `year - 1`, `year` and `year + 1`, sorted by instant.
pub fn jie_window(
    provider: &dyn SolarTermProvider,
    year: i32,
) -> Result<Vec<(SolarTerm, CivilTime)>, SearchError> {
    let mut window = Vec::with_capacity(36);
    for y in [year - 1, year, year + 1] {
        window.extend(provider.terms(y, true)?.iter());
    }
    window.sort_by_key(|(_, at)| *at);
    Ok(window)
}

/// Direction of the cycles for a birth: year-stem polarity plus gender.
pub fn direction(
    provider: &dyn SolarTermProvider,
    birth: &CivilTime,
    gender: Gender,
) -> Result<LuckDirection, SearchError> {
    let chart = four_pillars_for(provider, birth)?;
    Ok(base_luck::direction(chart.year, gender))
}

fn offset_for_chart(
    provider: &dyn SolarTermProvider,
    birth: &CivilTime,
    chart: &FourPillars,
    gender: Gender,
) -> Result<StartingOffset, SearchError> {
    let dir = base_luck::direction(chart.year, gender);
    let window = jie_window(provider, birth.year())?;
    let start = base_luck::starting_offset(birth, dir, &window)?;
    debug!(
        ?dir,
        term = start.reference_term.symbol(),
        minutes = start.minutes,
        age = start.age,
        "luck cycle start"
    );
    Ok(start)
}

/// Starting age and date of the first cycle.
pub fn starting_offset(
    provider: &dyn SolarTermProvider,
    birth: &CivilTime,
    gender: Gender,
) -> Result<StartingOffset, SearchError> {
    let chart = four_pillars_for(provider, birth)?;
    offset_for_chart(provider, birth, &chart, gender)
}

/// Chart, direction, start and `count` cycles for a birth.
pub fn luck_schedule(
    provider: &dyn SolarTermProvider,
    birth: &CivilTime,
    gender: Gender,
    count: u32,
) -> Result<LuckSchedule, SearchError> {
    let chart = four_pillars_for(provider, birth)?;
    let start = offset_for_chart(provider, birth, &chart, gender)?;
    let cycles = base_luck::luck_cycles(&chart, &start, count)?;
    Ok(LuckSchedule {
        pillars: chart,
        gender,
        direction: start.direction,
        start,
        cycles,
    })
}

/// `count` luck cycles for a birth.
pub fn generate(
    provider: &dyn SolarTermProvider,
    birth: &CivilTime,
    gender: Gender,
    count: u32,
) -> Result<Vec<LuckCycle>, SearchError> {
    Ok(luck_schedule(provider, birth, gender, count)?.cycles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganzhi_base::{BaseError, SolarTermSet};
    use ganzhi_core::TableSolarTerms;

    fn set(year: i32, entries: &[(SolarTerm, &str)]) -> SolarTermSet {
        SolarTermSet::from_entries(year, entries.iter().map(|(t, s)| (*t, s.parse().unwrap())))
    }

    #[test]
    fn window_spans_three_years_sorted() {
        let provider = TableSolarTerms::from_sets([
            set(1998, &[(SolarTerm::XiaoHan, "1998-01-05 22:18")]),
            set(1996, &[(SolarTerm::DaXue, "1996-12-07 05:14")]),
            set(
                1997,
                &[
                    (SolarTerm::LiChun, "1997-02-04 03:02"),
                    (SolarTerm::DaHan, "1997-01-20 09:43"),
                ],
            ),
        ]);
        let window = jie_window(&provider, 1997).unwrap();
        let terms: Vec<SolarTerm> = window.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            terms,
            vec![SolarTerm::DaXue, SolarTerm::LiChun, SolarTerm::XiaoHan]
        );
    }

    #[test]
    fn empty_provider_fails_before_window() {
        let provider = TableSolarTerms::default();
        let birth: CivilTime = "1997-01-21 16:30".parse().unwrap();
        let err = starting_offset(&provider, &birth, Gender::Male).unwrap_err();
        assert!(matches!(
            err,
            SearchError::Base(BaseError::MissingSolarTerm { .. })
        ));
    }
}
