//! Local civil date/time used as the chart timestamp.
//!
//! `CivilTime` is wall-clock time in the same zone as the solar-term tables
//! it is compared against. No zone conversion is performed anywhere: the
//! chart is cut over on local hour and local solar-term instants.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimeError;

/// Offset between `num_days_from_ce` and the Julian Day Number.
const JDN_CE_OFFSET: i64 = 1_721_425;

/// Date-time layouts accepted by [`CivilTime::from_str`], tried in order.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Local civil timestamp with one-second resolution.
///
/// Serialized in the `YYYY-MM-DD HH:MM:SS` display layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilTime(NaiveDateTime);

impl CivilTime {
    /// Build from calendar fields, rejecting impossible dates.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, second))
            .map(Self)
            .ok_or_else(|| {
                TimeError::InvalidDate(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ))
            })
    }

    /// Wrap an existing chrono value.
    pub const fn from_naive(dt: NaiveDateTime) -> Self {
        Self(dt)
    }

    /// The underlying chrono value.
    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Julian Day Number of the civil date (integer, noon-based).
    pub fn julian_day_number(&self) -> i64 {
        i64::from(self.0.date().num_days_from_ce()) + JDN_CE_OFFSET
    }

    /// Whole days from `reference` to this date, ignoring the time of day.
    pub fn days_since(&self, reference: NaiveDate) -> i64 {
        self.0.date().signed_duration_since(reference).num_days()
    }

    /// Signed whole minutes from `self` to `other`.
    pub fn minutes_until(&self, other: &CivilTime) -> i64 {
        other.0.signed_duration_since(self.0).num_minutes()
    }

    /// Advance by whole years, clamping Feb 29 to Feb 28 where needed.
    pub fn add_years(&self, years: u32) -> Result<Self, TimeError> {
        self.add_ymd(years, 0, 0)
    }

    /// Advance by (years, months, days) in that order.
    pub fn add_ymd(&self, years: u32, months: u32, days: u64) -> Result<Self, TimeError> {
        let total_months = years
            .checked_mul(12)
            .and_then(|m| m.checked_add(months))
            .ok_or(TimeError::OutOfRange("month count overflow"))?;
        self.0
            .checked_add_months(Months::new(total_months))
            .and_then(|dt| dt.checked_add_days(Days::new(days)))
            .map(Self)
            .ok_or(TimeError::OutOfRange("date arithmetic overflow"))
    }
}

impl From<NaiveDateTime> for CivilTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt)
    }
}

impl From<CivilTime> for NaiveDateTime {
    fn from(t: CivilTime) -> Self {
        t.0
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(Self(dt));
            }
        }
        // Date only: midnight.
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self)
            .ok_or_else(|| TimeError::InvalidDate(s.to_string()))
    }
}

impl Display for CivilTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

impl Serialize for CivilTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CivilTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = CivilTime::new(1997, 1, 21, 16, 30, 0).unwrap();
        assert_eq!(t.year(), 1997);
        assert_eq!(t.month(), 1);
        assert_eq!(t.day(), 21);
        assert_eq!(t.hour(), 16);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn new_rejects_impossible_date() {
        assert!(matches!(
            CivilTime::new(1997, 2, 30, 0, 0, 0),
            Err(TimeError::InvalidDate(_))
        ));
        assert!(CivilTime::new(1997, 1, 1, 24, 0, 0).is_err());
    }

    #[test]
    fn parse_accepted_layouts() {
        let want = CivilTime::new(1997, 1, 21, 16, 30, 0).unwrap();
        assert_eq!("1997-01-21 16:30:00".parse::<CivilTime>().unwrap(), want);
        assert_eq!("1997-01-21T16:30:00".parse::<CivilTime>().unwrap(), want);
        assert_eq!("1997-01-21 16:30".parse::<CivilTime>().unwrap(), want);
        assert_eq!(
            "  1997-01-21  ".parse::<CivilTime>().unwrap(),
            CivilTime::new(1997, 1, 21, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "yesterday", "1997/01/21", "1997-13-01", "1997-01-21 25:00"] {
            assert!(
                matches!(bad.parse::<CivilTime>(), Err(TimeError::InvalidDate(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let t = CivilTime::new(2024, 2, 29, 23, 5, 9).unwrap();
        assert_eq!(t.to_string(), "2024-02-29 23:05:09");
        assert_eq!(t.to_string().parse::<CivilTime>().unwrap(), t);
    }

    #[test]
    fn julian_day_number_j2000() {
        let t = CivilTime::new(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(t.julian_day_number(), 2_451_545);
    }

    #[test]
    fn minutes_until_is_signed() {
        let a = CivilTime::new(1997, 1, 21, 16, 30, 0).unwrap();
        let b = CivilTime::new(1997, 1, 24, 16, 30, 0).unwrap();
        assert_eq!(a.minutes_until(&b), 4320);
        assert_eq!(b.minutes_until(&a), -4320);
    }

    #[test]
    fn add_ymd_applies_months_then_days() {
        let t = CivilTime::new(1997, 1, 31, 8, 0, 0).unwrap();
        let moved = t.add_ymd(1, 1, 2).unwrap();
        // Jan 31 + 13 months clamps to Feb 28 1998, then +2 days.
        assert_eq!(moved, CivilTime::new(1998, 3, 2, 8, 0, 0).unwrap());
    }

    #[test]
    fn add_years_clamps_leap_day() {
        let t = CivilTime::new(2024, 2, 29, 0, 0, 0).unwrap();
        assert_eq!(
            t.add_years(1).unwrap(),
            CivilTime::new(2025, 2, 28, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn serde_uses_display_layout() {
        let t = CivilTime::new(1997, 1, 21, 16, 30, 0).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#""1997-01-21 16:30:00""#);
        let back: CivilTime = serde_json::from_str(r#""1997-01-21T16:30""#).unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<CivilTime>(r#""yesterday""#).is_err());
    }
}
