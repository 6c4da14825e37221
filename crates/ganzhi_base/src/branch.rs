//! The twelve earthly branches (dizhi) and their hidden stems.
//!
//! Branches cycle with period 12. Each branch stores one to three hidden
//! stems (canggan); the first one is the primary stem and stands in for
//! the branch in ten-god classification.

use serde::{Serialize, Serializer};

use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// Number of branches in the cycle.
pub const BRANCH_COUNT: u8 = 12;

/// The 12 earthly branches starting from Zi (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cyclic order (index 0 = 子, 11 = 亥).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Chinese symbol of the branch.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Zodiac animal associated with the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a cyclic index; any integer is reduced mod 12.
    pub const fn from_index(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(BRANCH_COUNT as i64) as usize]
    }

    /// Parse a single-character branch symbol.
    pub fn from_symbol(s: &str) -> Option<Self> {
        ALL_BRANCHES.into_iter().find(|b| b.symbol() == s)
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Hidden stems in storage order, primary stem first.
    pub const fn hidden_stems(self) -> &'static [Stem] {
        use Stem::*;
        match self {
            Self::Zi => &[Gui],
            Self::Chou => &[Ji, Gui, Xin],
            Self::Yin => &[Jia, Bing, Wu],
            Self::Mao => &[Yi],
            Self::Chen => &[Wu, Yi, Gui],
            Self::Si => &[Bing, Wu, Geng],
            Self::Wu => &[Ding, Ji],
            Self::Wei => &[Ji, Ding, Yi],
            Self::Shen => &[Geng, Ren, Wu],
            Self::You => &[Xin],
            Self::Xu => &[Wu, Xin, Ding],
            Self::Hai => &[Ren, Jia],
        }
    }

    /// Primary hidden stem (main qi), if the branch stores any.
    pub const fn primary_stem(self) -> Option<Stem> {
        match self.hidden_stems() {
            [first, ..] => Some(*first),
            [] => None,
        }
    }

    /// Branch `steps` positions further along the cycle (negative = backwards).
    pub const fn offset(self, steps: i64) -> Self {
        Self::from_index(self.index() as i64 + steps)
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_branches_count() {
        assert_eq!(ALL_BRANCHES.len(), BRANCH_COUNT as usize);
    }

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn symbol_roundtrip() {
        for b in ALL_BRANCHES {
            assert_eq!(Branch::from_symbol(b.symbol()), Some(b));
        }
        assert_eq!(Branch::from_symbol("甲"), None);
    }

    #[test]
    fn hidden_stem_counts() {
        let counts: Vec<usize> = ALL_BRANCHES.iter().map(|b| b.hidden_stems().len()).collect();
        assert_eq!(counts, vec![1, 3, 3, 1, 3, 3, 2, 3, 3, 1, 3, 2]);
        assert_eq!(counts.iter().sum::<usize>(), 28);
    }

    #[test]
    fn primary_stem_shares_element_with_branch() {
        // Main qi always carries the branch's own element.
        for b in ALL_BRANCHES {
            let primary = b.primary_stem().unwrap();
            assert_eq!(primary.element(), b.element(), "{}", b.symbol());
        }
    }

    #[test]
    fn from_index_wraps_both_ways() {
        assert_eq!(Branch::from_index(12), Branch::Zi);
        assert_eq!(Branch::from_index(-1), Branch::Hai);
        assert_eq!(Branch::from_index(1992), Branch::Zi);
    }

    #[test]
    fn animals_nonempty() {
        for b in ALL_BRANCHES {
            assert!(!b.animal().is_empty());
        }
    }
}
