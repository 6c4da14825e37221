//! Pillars (stem-branch pairs) and the four-pillar chart.
//!
//! A pillar's stem and branch advance together, so a pillar reached from
//! 甲子 by any offset always has stem and branch indices of equal parity.
//! Such a pillar also has a position 0..59 in the sexagenary cycle.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::error::BaseError;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const SEXAGENARY_CYCLE: u8 = 60;

/// A (stem, branch) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at a sexagenary offset from 甲子; any integer is reduced mod 60.
    pub const fn from_cycle_index(index: i64) -> Self {
        Self {
            stem: Stem::from_index(index),
            branch: Branch::from_index(index),
        }
    }

    /// Position 0..59 in the sexagenary cycle (甲子 = 0, 癸亥 = 59).
    ///
    /// Returns None for a pair whose stem and branch parities differ, which
    /// cannot occur in the cycle.
    pub const fn cycle_index(self) -> Option<u8> {
        let s = self.stem.index() as i16;
        let b = self.branch.index() as i16;
        if (s - b) % 2 != 0 {
            return None;
        }
        // n ≡ s (mod 10), n ≡ b (mod 12)  ⇒  n = 6s − 5b (mod 60)
        Some((6 * s - 5 * b).rem_euclid(SEXAGENARY_CYCLE as i16) as u8)
    }

    /// Pillar `steps` positions further along the cycle (negative = backwards).
    pub const fn offset(self, steps: i64) -> Self {
        Self {
            stem: self.stem.offset(steps),
            branch: self.branch.offset(steps),
        }
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

impl FromStr for Pillar {
    type Err = BaseError;

    /// Parse two symbols, e.g. `"丙子"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(st), Some(br), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(BaseError::InvalidSymbol(s.to_string()));
        };
        let stem = Stem::from_symbol(st.encode_utf8(&mut [0; 4]))
            .ok_or_else(|| BaseError::InvalidSymbol(st.to_string()))?;
        let branch = Branch::from_symbol(br.encode_utf8(&mut [0; 4]))
            .ok_or_else(|| BaseError::InvalidSymbol(br.to_string()))?;
        Ok(Self { stem, branch })
    }
}

/// Position of a pillar within the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    /// Lowercase English key used in structured output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    /// Chinese label (年柱, 月柱, 日柱, 时柱).
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "时柱",
        }
    }
}

/// Year, month, day and hour pillars of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Build from a slice, failing unless it holds exactly 4 pillars.
    pub fn from_slice(pillars: &[Pillar]) -> Result<Self, BaseError> {
        match pillars {
            [year, month, day, hour] => Ok(Self::new(*year, *month, *day, *hour)),
            _ => Err(BaseError::InvalidArity(pillars.len())),
        }
    }

    /// Parse from 4 two-symbol strings in year/month/day/hour order.
    pub fn from_strs<S: AsRef<str>>(pillars: &[S]) -> Result<Self, BaseError> {
        if pillars.len() != 4 {
            return Err(BaseError::InvalidArity(pillars.len()));
        }
        let parsed = pillars
            .iter()
            .map(|p| p.as_ref().parse::<Pillar>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_slice(&parsed)
    }

    /// The 4 pillars in chart order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// (position, pillar) pairs in chart order.
    pub fn positioned(&self) -> [(PillarPosition, Pillar); 4] {
        [
            (PillarPosition::Year, self.year),
            (PillarPosition::Month, self.month),
            (PillarPosition::Day, self.day),
            (PillarPosition::Hour, self.hour),
        ]
    }

    pub const fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    pub fn stems(&self) -> [Stem; 4] {
        self.pillars().map(|p| p.stem)
    }

    pub fn branches(&self) -> [Branch; 4] {
        self.pillars().map(|p| p.branch)
    }

    /// The day stem, reference point for ten-god classification.
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }

    /// The 4 pillars rendered as combined symbols, e.g. `["丙子", "辛丑", ...]`.
    pub fn to_strings(&self) -> [String; 4] {
        self.pillars().map(|p| p.to_string())
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

impl Serialize for FourPillars {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_strings().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Pillar {
        s.parse().unwrap()
    }

    #[test]
    fn cycle_index_endpoints() {
        assert_eq!(p("甲子").cycle_index(), Some(0));
        assert_eq!(p("乙丑").cycle_index(), Some(1));
        assert_eq!(p("甲戌").cycle_index(), Some(10));
        assert_eq!(p("癸亥").cycle_index(), Some(59));
    }

    #[test]
    fn cycle_index_roundtrip() {
        for n in 0..60 {
            assert_eq!(Pillar::from_cycle_index(n).cycle_index(), Some(n as u8));
        }
    }

    #[test]
    fn mismatched_parity_has_no_cycle_index() {
        assert_eq!(Pillar::new(Stem::Jia, Branch::Chou).cycle_index(), None);
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(p("癸亥").offset(1), p("甲子"));
        assert_eq!(p("甲子").offset(-1), p("癸亥"));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!("子丙".parse::<Pillar>(), Err(BaseError::InvalidSymbol(_))));
        assert!(matches!("丙".parse::<Pillar>(), Err(BaseError::InvalidSymbol(_))));
        assert!(matches!("丙子丑".parse::<Pillar>(), Err(BaseError::InvalidSymbol(_))));
        assert!(matches!("ab".parse::<Pillar>(), Err(BaseError::InvalidSymbol(_))));
    }

    #[test]
    fn from_strs_requires_four() {
        assert_eq!(
            FourPillars::from_strs(&["丙子", "辛丑", "癸亥"]),
            Err(BaseError::InvalidArity(3))
        );
        assert_eq!(
            FourPillars::from_slice(&[p("甲子"); 5]),
            Err(BaseError::InvalidArity(5))
        );
    }

    #[test]
    fn from_strs_order_and_display() {
        let fp = FourPillars::from_strs(&["丙子", "辛丑", "癸亥", "庚申"]).unwrap();
        assert_eq!(fp.day_master(), Stem::Gui);
        assert_eq!(fp.to_string(), "丙子 辛丑 癸亥 庚申");
        assert_eq!(fp.branches(), [Branch::Zi, Branch::Chou, Branch::Hai, Branch::Shen]);
        assert_eq!(fp.get(PillarPosition::Hour), p("庚申"));
    }

    #[test]
    fn serializes_as_strings() {
        let fp = FourPillars::from_strs(&["丙子", "辛丑", "癸亥", "庚申"]).unwrap();
        assert_eq!(
            serde_json::to_string(&fp).unwrap(),
            r#"["丙子","辛丑","癸亥","庚申"]"#
        );
        assert_eq!(
            serde_json::to_string(&p("丙子")).unwrap(),
            r#"{"stem":"丙","branch":"子"}"#
        );
    }
}
