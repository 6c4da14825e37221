//! Ten-god (shishen) relations between the day master and any stem or branch.
//!
//! The relation is read from two facts about the target relative to the
//! day master ("me"):
//! - which of five directed element relations holds (same, generates me,
//!   I generate, dominates me, I dominate)
//! - whether the polarities match
//!
//! Branches are classified through their primary hidden stem.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::element::Element;
use crate::pillar::{FourPillars, PillarPosition};
use crate::stem::Stem;

/// Directed element relation from the day master's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementRelation {
    Same,
    GeneratesMe,
    IGenerate,
    DominatesMe,
    IDominate,
}

/// Relation table in evaluation order: each entry maps my element to the
/// element that stands in that relation to me.
pub const RELATION_TABLE: [(ElementRelation, fn(Element) -> Element); 5] = [
    (ElementRelation::Same, |e| e),
    (ElementRelation::GeneratesMe, Element::generated_by),
    (ElementRelation::IGenerate, Element::generates),
    (ElementRelation::DominatesMe, Element::dominated_by),
    (ElementRelation::IDominate, Element::dominates),
];

/// First relation in table order whose entry for `me` equals `he`.
pub fn element_relation(me: Element, he: Element) -> Option<ElementRelation> {
    RELATION_TABLE
        .iter()
        .find(|(_, target_of)| target_of(me) == he)
        .map(|(rel, _)| *rel)
}

/// The ten gods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TenGod {
    BiJian,
    JieCai,
    ShiShen,
    ShangGuan,
    PianCai,
    ZhengCai,
    QiSha,
    ZhengGuan,
    PianYin,
    ZhengYin,
}

/// All 10 gods in conventional order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::BiJian,
    TenGod::JieCai,
    TenGod::ShiShen,
    TenGod::ShangGuan,
    TenGod::PianCai,
    TenGod::ZhengCai,
    TenGod::QiSha,
    TenGod::ZhengGuan,
    TenGod::PianYin,
    TenGod::ZhengYin,
];

impl TenGod {
    /// Combine an element relation with the polarity class.
    pub const fn from_relation(relation: ElementRelation, same_polarity: bool) -> Self {
        match (relation, same_polarity) {
            (ElementRelation::Same, true) => Self::BiJian,
            (ElementRelation::Same, false) => Self::JieCai,
            (ElementRelation::IGenerate, true) => Self::ShiShen,
            (ElementRelation::IGenerate, false) => Self::ShangGuan,
            (ElementRelation::IDominate, true) => Self::PianCai,
            (ElementRelation::IDominate, false) => Self::ZhengCai,
            (ElementRelation::DominatesMe, true) => Self::QiSha,
            (ElementRelation::DominatesMe, false) => Self::ZhengGuan,
            (ElementRelation::GeneratesMe, true) => Self::PianYin,
            (ElementRelation::GeneratesMe, false) => Self::ZhengYin,
        }
    }

    /// Chinese name.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫财",
            Self::ShiShen => "食神",
            Self::ShangGuan => "伤官",
            Self::PianCai => "偏财",
            Self::ZhengCai => "正财",
            Self::QiSha => "七杀",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }

    /// English gloss.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::BiJian => "Friend",
            Self::JieCai => "Rob Wealth",
            Self::ShiShen => "Eating God",
            Self::ShangGuan => "Hurting Officer",
            Self::PianCai => "Indirect Wealth",
            Self::ZhengCai => "Direct Wealth",
            Self::QiSha => "Seven Killings",
            Self::ZhengGuan => "Direct Officer",
            Self::PianYin => "Indirect Resource",
            Self::ZhengYin => "Direct Resource",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        ALL_TEN_GODS.into_iter().find(|g| g.symbol() == s)
    }
}

impl Serialize for TenGod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// Outcome of a ten-god classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGodRelation {
    /// The target is the day-master stem itself.
    DayMaster,
    God(TenGod),
    /// No rule applied.
    Unresolved,
}

impl TenGodRelation {
    /// Chinese label; 日主 for the day master, empty when unresolved.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::DayMaster => "日主",
            Self::God(g) => g.symbol(),
            Self::Unresolved => "",
        }
    }

    pub const fn god(self) -> Option<TenGod> {
        match self {
            Self::God(g) => Some(g),
            _ => None,
        }
    }
}

impl Serialize for TenGodRelation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// Anything that can be classified against a day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGodTarget {
    Stem(Stem),
    Branch(Branch),
}

impl TenGodTarget {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Stem(s) => s.symbol(),
            Self::Branch(b) => b.symbol(),
        }
    }
}

impl From<Stem> for TenGodTarget {
    fn from(s: Stem) -> Self {
        Self::Stem(s)
    }
}

impl From<Branch> for TenGodTarget {
    fn from(b: Branch) -> Self {
        Self::Branch(b)
    }
}

/// Classify a stem against the day master by element relation and polarity.
fn classify_stem(day_master: Stem, stem: Stem) -> TenGodRelation {
    match element_relation(day_master.element(), stem.element()) {
        Some(rel) => TenGodRelation::God(TenGod::from_relation(
            rel,
            day_master.polarity() == stem.polarity(),
        )),
        None => TenGodRelation::Unresolved,
    }
}

/// Ten-god relation of `target` relative to `day_master`.
pub fn resolve(day_master: Stem, target: impl Into<TenGodTarget>) -> TenGodRelation {
    match target.into() {
        TenGodTarget::Stem(s) if s == day_master => TenGodRelation::DayMaster,
        TenGodTarget::Stem(s) => classify_stem(day_master, s),
        TenGodTarget::Branch(b) => match b.primary_stem() {
            Some(primary) => classify_stem(day_master, primary),
            None => TenGodRelation::Unresolved,
        },
    }
}

/// Relations of every hidden stem of `branch`, in storage order.
///
/// A hidden stem equal to the day master is 比肩: only the day stem itself
/// is the day master.
pub fn resolve_hidden(day_master: Stem, branch: Branch) -> Vec<(Stem, TenGodRelation)> {
    branch
        .hidden_stems()
        .iter()
        .map(|s| (*s, classify_stem(day_master, *s)))
        .collect()
}

/// A symbol with its relation, serialised as `[symbol, relation]`.
pub type TenGodPair = (&'static str, TenGodRelation);

/// Stem and branch relations of each pillar against the chart's day stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TenGodDistribution {
    pub year: [TenGodPair; 2],
    pub month: [TenGodPair; 2],
    pub day: [TenGodPair; 2],
    pub hour: [TenGodPair; 2],
}

impl TenGodDistribution {
    pub const fn get(&self, position: PillarPosition) -> [TenGodPair; 2] {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// All 8 (symbol, relation) pairs in chart order.
    pub fn iter(&self) -> impl Iterator<Item = TenGodPair> + '_ {
        [self.year, self.month, self.day, self.hour]
            .into_iter()
            .flatten()
    }
}

/// Ten-god distribution over the chart's 8 stems and branches.
pub fn ten_god_distribution(chart: &FourPillars) -> TenGodDistribution {
    let dm = chart.day_master();
    let pair = |position: PillarPosition| {
        let p = chart.get(position);
        [
            (p.stem.symbol(), resolve(dm, p.stem)),
            (p.branch.symbol(), resolve(dm, p.branch)),
        ]
    };
    TenGodDistribution {
        year: pair(PillarPosition::Year),
        month: pair(PillarPosition::Month),
        day: pair(PillarPosition::Day),
        hour: pair(PillarPosition::Hour),
    }
}

/// Count of each ten god over the chart's 8 positions; the day master
/// itself and unresolved positions are not counted.
pub fn ten_god_frequency(chart: &FourPillars) -> BTreeMap<TenGod, u32> {
    let mut counts = BTreeMap::new();
    for (_, rel) in ten_god_distribution(chart).iter() {
        if let Some(god) = rel.god() {
            *counts.entry(god).or_insert(0) += 1;
        }
    }
    counts
}
