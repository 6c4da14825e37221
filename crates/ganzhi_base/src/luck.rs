//! Luck cycles (dayun): decade-long pillars stepping away from the chart.
//!
//! Direction follows year-stem polarity and gender. The starting age comes
//! from the distance between birth and the nearest Jie term in that
//! direction, at three days per cycle year (4320 minutes). Each cycle then
//! advances one sexagenary step and ten years.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use ganzhi_time::{CivilTime, MINUTES_PER_DAY};
use serde::Serialize;

use crate::element::Polarity;
use crate::error::BaseError;
use crate::pillar::{FourPillars, Pillar};
use crate::solar_term::SolarTerm;
use crate::stem::Stem;
use crate::ten_god::{TenGodRelation, resolve};
use crate::wuxing::PillarBreakdown;

/// Minutes of birth-to-term distance per cycle year (3 days).
pub const MINUTES_PER_LUCK_YEAR: i64 = 3 * MINUTES_PER_DAY;

/// Years covered by one luck cycle.
pub const YEARS_PER_CYCLE: u32 = 10;

/// Months per year and days per month used to spread a fractional age.
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const DAYS_PER_MONTH: f64 = 30.0;

const FLOOR_EPSILON: f64 = 1e-9;

/// Chart subject's gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            _ => Err(BaseError::InvalidGender(s.to_string())),
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction in which luck cycles step through the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LuckDirection {
    Forward,
    Reverse,
}

impl LuckDirection {
    /// +1 for forward, -1 for reverse.
    pub const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }
}

/// Yang year + male or Yin year + female steps forward; otherwise reverse.
pub const fn direction(year_pillar: Pillar, gender: Gender) -> LuckDirection {
    match (year_pillar.stem.polarity(), gender) {
        (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => LuckDirection::Forward,
        _ => LuckDirection::Reverse,
    }
}

/// The Jie term that anchors the starting age.
///
/// Forward picks the first term strictly after birth, reverse the last
/// term strictly before it.
pub fn reference_term(
    birth: &CivilTime,
    terms: &[(SolarTerm, CivilTime)],
    dir: LuckDirection,
) -> Result<(SolarTerm, CivilTime), BaseError> {
    let mut sorted = terms.to_vec();
    sorted.sort_by_key(|(_, at)| *at);
    let found = match dir {
        LuckDirection::Forward => sorted.into_iter().find(|(_, at)| at > birth),
        LuckDirection::Reverse => sorted.into_iter().rev().find(|(_, at)| at < birth),
    };
    found.ok_or(BaseError::NoReferenceTerm(match dir {
        LuckDirection::Forward => "no term after birth",
        LuckDirection::Reverse => "no term before birth",
    }))
}

/// Starting age in cycle years, rounded to 2 decimals.
pub fn age_from_minutes(minutes: i64) -> f64 {
    let years = minutes.abs() as f64 / MINUTES_PER_LUCK_YEAR as f64;
    (years * 100.0).round() / 100.0
}

/// Split an age into whole (years, months, days) on a 12-month, 30-day grid.
pub fn decompose_age(age: f64) -> (u32, u32, u64) {
    let age = age.max(0.0);
    let years = (age + FLOOR_EPSILON).floor();
    let months_f = ((age - years) * MONTHS_PER_YEAR).max(0.0);
    let months = (months_f + FLOOR_EPSILON).floor();
    let days = ((months_f - months) * DAYS_PER_MONTH + FLOOR_EPSILON).floor().max(0.0);
    (years as u32, months as u32, days as u64)
}

/// Where and when the first luck cycle begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StartingOffset {
    pub direction: LuckDirection,
    pub reference_term: SolarTerm,
    pub reference_time: CivilTime,
    /// Absolute birth-to-term distance.
    pub minutes: i64,
    /// Cycle years, 2-decimal precision.
    pub age: f64,
    pub start_date: CivilTime,
}

/// Starting age and date for `birth` given the Jie terms around it.
pub fn starting_offset(
    birth: &CivilTime,
    dir: LuckDirection,
    terms: &[(SolarTerm, CivilTime)],
) -> Result<StartingOffset, BaseError> {
    let (reference_term, reference_time) = self::reference_term(birth, terms, dir)?;
    let minutes = birth.minutes_until(&reference_time).abs();
    let age = age_from_minutes(minutes);
    let (y, m, d) = decompose_age(age);
    let start_date = birth.add_ymd(y, m, d)?;
    Ok(StartingOffset {
        direction: dir,
        reference_term,
        reference_time,
        minutes,
        age,
        start_date,
    })
}

/// Pillar of the `step`-th cycle (0-based) counted from `origin`.
pub const fn cycle_pillar(origin: Pillar, dir: LuckDirection, step: u32) -> Pillar {
    origin.offset(dir.sign() * step as i64)
}

/// Ten-god relations of a cycle pillar's stem and branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleTenGods {
    pub stem: TenGodRelation,
    pub branch: TenGodRelation,
}

/// One decade of the luck-cycle sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuckCycle {
    /// 1-based position.
    pub step: u32,
    pub pillar: Pillar,
    pub start_age: f64,
    pub start_date: CivilTime,
    pub hidden_stems: Vec<Stem>,
    pub elements: PillarBreakdown,
    pub ten_gods: CycleTenGods,
}

/// Generate `count` luck cycles starting from the chart's day pillar.
///
/// Ten gods are taken against the day stem.
pub fn luck_cycles(
    chart: &FourPillars,
    start: &StartingOffset,
    count: u32,
) -> Result<Vec<LuckCycle>, BaseError> {
    let day_stem = chart.day_master();
    (0..count)
        .map(|i| {
            let pillar = cycle_pillar(chart.day, start.direction, i);
            let start_date = start.start_date.add_years(YEARS_PER_CYCLE * i)?;
            Ok(LuckCycle {
                step: i + 1,
                pillar,
                start_age: round2(start.age + f64::from(YEARS_PER_CYCLE * i)),
                start_date,
                hidden_stems: pillar.branch.hidden_stems().to_vec(),
                elements: PillarBreakdown::of(pillar),
                ten_gods: CycleTenGods {
                    stem: resolve(day_stem, pillar.stem),
                    branch: resolve(day_stem, pillar.branch),
                },
            })
        })
        .collect()
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
