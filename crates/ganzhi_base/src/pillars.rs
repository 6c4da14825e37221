//! Four-pillar calculation from a civil timestamp and a solar-term set.
//!
//! Year and month cut over on solar terms, not on civil boundaries:
//! - the sexagenary year starts at Start of Spring (立春)
//! - each month starts at one of the 12 Jie terms
//!
//! Day and hour pillars depend only on the civil clock. The day pillar
//! counts days from a known 甲子 day; at 23:00 the chart already belongs to
//! the next day (late zi hour).

use chrono::NaiveDate;
use ganzhi_time::CivilTime;

use crate::branch::Branch;
use crate::error::BaseError;
use crate::pillar::{FourPillars, Pillar};
use crate::solar_term::{SolarTerm, SolarTermSet};
use crate::stem::Stem;

/// Year 4 CE is cycle index 0 (甲子 year).
pub const YEAR_EPOCH: i32 = 4;

/// A 甲子 day: 1949-10-01 (JDN 2433191).
pub const JIAZI_DAY: (i32, u32, u32) = (1949, 10, 1);

/// Hour from which the day pillar rolls to the next day.
pub const LATE_ZI_HOUR: u32 = 23;

/// Year pillar from a cycle year (year number after any 立春 adjustment).
pub const fn year_pillar_for(year: i32) -> Pillar {
    Pillar::from_cycle_index((year - YEAR_EPOCH) as i64)
}

/// Year pillar: the civil year, minus one before that year's 立春.
///
/// `terms` must be the set for `time`'s civil year.
pub fn year_pillar(time: &CivilTime, terms: &SolarTermSet) -> Result<Pillar, BaseError> {
    let li_chun = terms.require(SolarTerm::LiChun)?;
    let year = if *time < li_chun {
        time.year() - 1
    } else {
        time.year()
    };
    Ok(year_pillar_for(year))
}

/// Stem of the Minor Cold (丑) month opening civil year `year_stem`.
///
/// Pairs of stems five apart share an entry: 甲己→乙, 乙庚→丁, 丙辛→己,
/// 丁壬→辛, 戊癸→癸.
pub const fn first_month_stem(year_stem: Stem) -> Stem {
    match year_stem {
        Stem::Jia | Stem::Ji => Stem::Yi,
        Stem::Yi | Stem::Geng => Stem::Ding,
        Stem::Bing | Stem::Xin => Stem::Ji,
        Stem::Ding | Stem::Ren => Stem::Xin,
        Stem::Wu | Stem::Gui => Stem::Gui,
    }
}

/// Index 0..11 of the month bucket containing `time`, and the civil year
/// whose stem drives the month stem.
///
/// Bucket `k` starts at the `k`-th Jie term of the year. Instants before
/// Minor Cold fall in the last bucket (大雪, 子 month) of the previous
/// civil year.
pub fn month_index(time: &CivilTime, terms: &SolarTermSet) -> Result<(u8, i32), BaseError> {
    let boundaries = terms.jie_boundaries()?;
    match boundaries.iter().rposition(|b| b <= time) {
        Some(k) => Ok((k as u8, time.year())),
        None => Ok((11, time.year() - 1)),
    }
}

/// Month pillar: stem from the civil year's first-month stem plus the
/// month index, branch from the month index (小寒 opens 丑).
pub fn month_pillar(time: &CivilTime, terms: &SolarTermSet) -> Result<Pillar, BaseError> {
    let (k, stem_year) = month_index(time, terms)?;
    let year_stem = Stem::from_index((stem_year - YEAR_EPOCH) as i64);
    let stem = first_month_stem(year_stem).offset(k as i64);
    let branch = Branch::from_index(k as i64 + 1);
    Ok(Pillar::new(stem, branch))
}

/// Day offset from the reference 甲子 day, including the late zi-hour roll.
pub fn day_offset(time: &CivilTime) -> i64 {
    let (y, m, d) = JIAZI_DAY;
    // Constant date, always valid.
    let reference = NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    let offset = time.days_since(reference);
    if time.hour() >= LATE_ZI_HOUR {
        offset + 1
    } else {
        offset
    }
}

/// Day pillar from the day offset mod 10 / mod 12.
pub fn day_pillar(time: &CivilTime) -> Pillar {
    Pillar::from_cycle_index(day_offset(time))
}

/// Stem of the 子 hour for a given day stem.
///
/// 甲己→甲, 乙庚→丙, 丙辛→戊, 丁壬→庚, 戊癸→壬.
pub const fn first_hour_stem(day_stem: Stem) -> Stem {
    match day_stem {
        Stem::Jia | Stem::Ji => Stem::Jia,
        Stem::Yi | Stem::Geng => Stem::Bing,
        Stem::Bing | Stem::Xin => Stem::Wu,
        Stem::Ding | Stem::Ren => Stem::Geng,
        Stem::Wu | Stem::Gui => Stem::Ren,
    }
}

/// Branch of the two-hour bucket; 23:00–00:59 is 子.
pub const fn hour_branch(hour: u32) -> Branch {
    Branch::from_index(((hour as i64 + 1) / 2) % 12)
}

/// Hour pillar for a clock hour and the chart's day stem.
pub const fn hour_pillar(hour: u32, day_stem: Stem) -> Pillar {
    let branch = hour_branch(hour);
    let stem = first_hour_stem(day_stem).offset(branch.index() as i64);
    Pillar::new(stem, branch)
}

/// All four pillars in year/month/day/hour order.
pub fn four_pillars(time: &CivilTime, terms: &SolarTermSet) -> Result<FourPillars, BaseError> {
    let year = year_pillar(time, terms)?;
    let month = month_pillar(time, terms)?;
    let day = day_pillar(time);
    let hour = hour_pillar(time.hour(), day.stem);
    Ok(FourPillars::new(year, month, day, hour))
}
