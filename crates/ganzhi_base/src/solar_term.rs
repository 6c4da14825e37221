//! The 24 solar terms (jieqi) and per-year term sets.
//!
//! Terms are listed in civil-year order starting from Minor Cold (小寒,
//! early January). The 12 terms at even positions of that order are the
//! "Jie" terms: each one opens a sexagenary month. The month opened by
//! Minor Cold carries the 丑 branch, Start of Spring (立春) opens 寅, and so
//! on around the cycle.

use std::collections::BTreeMap;

use ganzhi_time::CivilTime;
use serde::{Serialize, Serializer};

use crate::error::BaseError;

/// The 24 solar terms in civil-year order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SolarTerm {
    XiaoHan,
    DaHan,
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
}

/// All 24 solar terms in civil-year order (index 0 = 小寒).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
];

/// The 12 month-opening Jie terms in civil-year order.
///
/// Position `k` in this array opens the month with branch index `k + 1`.
pub const JIE_TERMS: [SolarTerm; 12] = [
    SolarTerm::XiaoHan,
    SolarTerm::LiChun,
    SolarTerm::JingZhe,
    SolarTerm::QingMing,
    SolarTerm::LiXia,
    SolarTerm::MangZhong,
    SolarTerm::XiaoShu,
    SolarTerm::LiQiu,
    SolarTerm::BaiLu,
    SolarTerm::HanLu,
    SolarTerm::LiDong,
    SolarTerm::DaXue,
];

impl SolarTerm {
    /// Chinese name of the term.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::XiaoHan => "小寒",
            Self::DaHan => "大寒",
            Self::LiChun => "立春",
            Self::YuShui => "雨水",
            Self::JingZhe => "惊蛰",
            Self::ChunFen => "春分",
            Self::QingMing => "清明",
            Self::GuYu => "谷雨",
            Self::LiXia => "立夏",
            Self::XiaoMan => "小满",
            Self::MangZhong => "芒种",
            Self::XiaZhi => "夏至",
            Self::XiaoShu => "小暑",
            Self::DaShu => "大暑",
            Self::LiQiu => "立秋",
            Self::ChuShu => "处暑",
            Self::BaiLu => "白露",
            Self::QiuFen => "秋分",
            Self::HanLu => "寒露",
            Self::ShuangJiang => "霜降",
            Self::LiDong => "立冬",
            Self::XiaoXue => "小雪",
            Self::DaXue => "大雪",
            Self::DongZhi => "冬至",
        }
    }

    /// English name of the term.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::XiaoHan => "Minor Cold",
            Self::DaHan => "Major Cold",
            Self::LiChun => "Start of Spring",
            Self::YuShui => "Rain Water",
            Self::JingZhe => "Awakening of Insects",
            Self::ChunFen => "Spring Equinox",
            Self::QingMing => "Pure Brightness",
            Self::GuYu => "Grain Rain",
            Self::LiXia => "Start of Summer",
            Self::XiaoMan => "Grain Buds",
            Self::MangZhong => "Grain in Ear",
            Self::XiaZhi => "Summer Solstice",
            Self::XiaoShu => "Minor Heat",
            Self::DaShu => "Major Heat",
            Self::LiQiu => "Start of Autumn",
            Self::ChuShu => "End of Heat",
            Self::BaiLu => "White Dew",
            Self::QiuFen => "Autumn Equinox",
            Self::HanLu => "Cold Dew",
            Self::ShuangJiang => "Frost's Descent",
            Self::LiDong => "Start of Winter",
            Self::XiaoXue => "Minor Snow",
            Self::DaXue => "Major Snow",
            Self::DongZhi => "Winter Solstice",
        }
    }

    /// 0-based index in civil-year order (小寒=0 .. 冬至=23).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Whether the term opens a sexagenary month.
    pub fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// Position among the 12 Jie terms, or None for a mid-month (Qi) term.
    pub fn jie_index(self) -> Option<u8> {
        self.is_jie().then(|| self.index() / 2)
    }

    /// Parse a Chinese term name.
    pub fn from_symbol(s: &str) -> Option<Self> {
        ALL_SOLAR_TERMS.into_iter().find(|t| t.symbol() == s)
    }
}

impl Serialize for SolarTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// Solar-term instants for one civil year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolarTermSet {
    year: i32,
    terms: BTreeMap<SolarTerm, CivilTime>,
}

impl SolarTermSet {
    /// Empty set for a civil year.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            terms: BTreeMap::new(),
        }
    }

    /// Build from (term, instant) pairs.
    pub fn from_entries(year: i32, entries: impl IntoIterator<Item = (SolarTerm, CivilTime)>) -> Self {
        Self {
            year,
            terms: entries.into_iter().collect(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn insert(&mut self, term: SolarTerm, at: CivilTime) {
        self.terms.insert(term, at);
    }

    pub fn get(&self, term: SolarTerm) -> Option<CivilTime> {
        self.terms.get(&term).copied()
    }

    /// Instant of `term`, failing with `MissingSolarTerm` when absent.
    pub fn require(&self, term: SolarTerm) -> Result<CivilTime, BaseError> {
        self.get(term).ok_or(BaseError::MissingSolarTerm {
            term,
            year: self.year,
        })
    }

    /// The 12-term subset containing only month-opening Jie terms.
    pub fn jie_only(&self) -> Self {
        Self {
            year: self.year,
            terms: self
                .terms
                .iter()
                .filter(|(t, _)| t.is_jie())
                .map(|(t, at)| (*t, *at))
                .collect(),
        }
    }

    /// Instants of all 12 Jie terms in civil-year order.
    pub fn jie_boundaries(&self) -> Result<[CivilTime; 12], BaseError> {
        let mut out = [CivilTime::default(); 12];
        for (slot, term) in out.iter_mut().zip(JIE_TERMS) {
            *slot = self.require(term)?;
        }
        Ok(out)
    }

    /// Entries in civil-year term order.
    pub fn iter(&self) -> impl Iterator<Item = (SolarTerm, CivilTime)> + '_ {
        self.terms.iter().map(|(t, at)| (*t, *at))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> CivilTime {
        s.parse().unwrap()
    }

    #[test]
    fn indices_sequential() {
        for (i, term) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(term.index() as usize, i);
        }
    }

    #[test]
    fn jie_terms_are_every_other_term() {
        let jie: Vec<SolarTerm> = ALL_SOLAR_TERMS.into_iter().filter(|t| t.is_jie()).collect();
        assert_eq!(jie, JIE_TERMS.to_vec());
        for (k, term) in JIE_TERMS.iter().enumerate() {
            assert_eq!(term.jie_index(), Some(k as u8));
        }
        assert_eq!(SolarTerm::DongZhi.jie_index(), None);
    }

    #[test]
    fn symbol_roundtrip() {
        for term in ALL_SOLAR_TERMS {
            assert_eq!(SolarTerm::from_symbol(term.symbol()), Some(term));
        }
        assert_eq!(SolarTerm::from_symbol("Spring"), None);
    }

    #[test]
    fn require_reports_missing_term() {
        let set = SolarTermSet::new(1997);
        assert_eq!(
            set.require(SolarTerm::LiChun),
            Err(BaseError::MissingSolarTerm {
                term: SolarTerm::LiChun,
                year: 1997
            })
        );
    }

    #[test]
    fn jie_only_drops_qi_terms() {
        let set = SolarTermSet::from_entries(
            1997,
            [
                (SolarTerm::XiaoHan, t("1997-01-05 16:24")),
                (SolarTerm::DaHan, t("1997-01-20 09:43")),
                (SolarTerm::LiChun, t("1997-02-04 03:02")),
            ],
        );
        let jie = set.jie_only();
        assert_eq!(jie.len(), 2);
        assert_eq!(jie.year(), 1997);
        assert!(jie.get(SolarTerm::DaHan).is_none());
        assert!(jie.get(SolarTerm::LiChun).is_some());
    }

    #[test]
    fn jie_boundaries_needs_all_twelve() {
        let mut set = SolarTermSet::new(1997);
        set.insert(SolarTerm::XiaoHan, t("1997-01-05 16:24"));
        assert!(matches!(
            set.jie_boundaries(),
            Err(BaseError::MissingSolarTerm {
                term: SolarTerm::LiChun,
                ..
            })
        ));
    }
}
