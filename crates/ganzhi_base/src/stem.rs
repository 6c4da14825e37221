//! The ten heavenly stems (tiangan).
//!
//! Stems cycle with period 10. Elements come in consecutive pairs
//! (Wood, Fire, Earth, Metal, Water) and polarity alternates starting
//! with Yang at index 0 (甲).

use serde::{Serialize, Serializer};

use crate::element::{Element, Polarity};

/// Number of stems in the cycle.
pub const STEM_COUNT: u8 = 10;

/// The 10 heavenly stems starting from Jia (甲).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cyclic order (index 0 = 甲, 9 = 癸).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Chinese symbol of the stem.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin name of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at a cyclic index; any integer is reduced mod 10.
    pub const fn from_index(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(STEM_COUNT as i64) as usize]
    }

    /// Parse a single-character stem symbol.
    pub fn from_symbol(s: &str) -> Option<Self> {
        ALL_STEMS.into_iter().find(|st| st.symbol() == s)
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Stem `steps` positions further along the cycle (negative = backwards).
    pub const fn offset(self, steps: i64) -> Self {
        Self::from_index(self.index() as i64 + steps)
    }
}

impl Serialize for Stem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stems_count() {
        assert_eq!(ALL_STEMS.len(), STEM_COUNT as usize);
    }

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn symbol_roundtrip() {
        for s in ALL_STEMS {
            assert_eq!(Stem::from_symbol(s.symbol()), Some(s));
        }
        assert_eq!(Stem::from_symbol("子"), None);
        assert_eq!(Stem::from_symbol(""), None);
    }

    #[test]
    fn elements_come_in_pairs() {
        for pair in ALL_STEMS.chunks(2) {
            assert_eq!(pair[0].element(), pair[1].element());
            assert_eq!(pair[0].polarity(), Polarity::Yang);
            assert_eq!(pair[1].polarity(), Polarity::Yin);
        }
    }

    #[test]
    fn from_index_wraps_both_ways() {
        assert_eq!(Stem::from_index(10), Stem::Jia);
        assert_eq!(Stem::from_index(-1), Stem::Gui);
        assert_eq!(Stem::from_index(1992), Stem::Bing);
    }

    #[test]
    fn offset_moves_cyclically() {
        assert_eq!(Stem::Gui.offset(1), Stem::Jia);
        assert_eq!(Stem::Jia.offset(-3), Stem::Xin);
    }

    #[test]
    fn serializes_as_symbol() {
        assert_eq!(serde_json::to_string(&Stem::Geng).unwrap(), "\"庚\"");
    }
}
