//! Branch combination patterns.
//!
//! Four families are tested against the chart's 4 branches, in priority
//! order:
//! 1. Tri-harmony (三会): three branches of one season/direction
//! 2. Tri-combination (三合): birth, peak and tomb branches of one element
//! 3. Five-bureau (五行局): follows from a tri-harmony or tri-combination
//!    already found, never from the branches directly
//! 4. Paired combination (六合): two branches
//!
//! The first match in that order is dominant. Every other match is
//! reported as secondary, grouped by family.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::Element;
use crate::pillar::FourPillars;

use Branch::*;
use CombinationKind::*;

/// Combination family, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CombinationKind {
    TriHarmony,
    TriCombination,
    FiveBureau,
    PairedCombination,
}

/// One named pattern with its member branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationRule {
    pub name: &'static str,
    pub kind: CombinationKind,
    pub element: Element,
    pub branches: &'static [Branch],
    pub description: &'static str,
}

impl CombinationRule {
    /// True when every member branch appears in `branches`.
    pub fn matches(&self, branches: &[Branch]) -> bool {
        self.branches.iter().all(|b| branches.contains(b))
    }
}

const fn rule(
    name: &'static str,
    kind: CombinationKind,
    element: Element,
    branches: &'static [Branch],
    description: &'static str,
) -> CombinationRule {
    CombinationRule {
        name,
        kind,
        element,
        branches,
        description,
    }
}

/// Directional triads.
pub const TRI_HARMONY_RULES: [CombinationRule; 4] = [
    rule("木三会", TriHarmony, Element::Wood, &[Yin, Mao, Chen], "寅卯辰会聚东方木气，木势专旺"),
    rule("火三会", TriHarmony, Element::Fire, &[Si, Wu, Wei], "巳午未会聚南方火气，火势专旺"),
    rule("金三会", TriHarmony, Element::Metal, &[Shen, You, Xu], "申酉戌会聚西方金气，金势专旺"),
    rule("水三会", TriHarmony, Element::Water, &[Hai, Zi, Chou], "亥子丑会聚北方水气，水势专旺"),
];

/// Birth-peak-tomb triads.
pub const TRI_COMBINATION_RULES: [CombinationRule; 4] = [
    rule("水三合", TriCombination, Element::Water, &[Shen, Zi, Chen], "申子辰三合成水局，水势流通"),
    rule("木三合", TriCombination, Element::Wood, &[Hai, Mao, Wei], "亥卯未三合成木局，木势生发"),
    rule("火三合", TriCombination, Element::Fire, &[Yin, Wu, Xu], "寅午戌三合成火局，火势炎上"),
    rule("金三合", TriCombination, Element::Metal, &[Si, You, Chou], "巳酉丑三合成金局，金势肃降"),
];

/// Element bureaus; branch lists are empty because they are only inferred.
pub const FIVE_BUREAU_RULES: [CombinationRule; 5] = [
    rule("水二局", FiveBureau, Element::Water, &[], "水局成象，局数为二"),
    rule("木三局", FiveBureau, Element::Wood, &[], "木局成象，局数为三"),
    rule("金四局", FiveBureau, Element::Metal, &[], "金局成象，局数为四"),
    rule("土五局", FiveBureau, Element::Earth, &[], "土局成象，局数为五"),
    rule("火六局", FiveBureau, Element::Fire, &[], "火局成象，局数为六"),
];

/// Two-branch combinations.
pub const PAIRED_RULES: [CombinationRule; 5] = [
    rule("水六合", PairedCombination, Element::Water, &[Zi, Chou], "子丑相合，化气归水"),
    rule("木六合", PairedCombination, Element::Wood, &[Yin, Hai], "寅亥相合，化气归木"),
    rule("火六合", PairedCombination, Element::Fire, &[Mao, Xu], "卯戌相合，化气归火"),
    rule("金六合", PairedCombination, Element::Metal, &[Chen, You], "辰酉相合，化气归金"),
    rule("土六合", PairedCombination, Element::Earth, &[Wu, Wei], "午未相合，化气归土"),
];

/// Bureau for an element.
pub fn bureau_for(element: Element) -> &'static CombinationRule {
    FIVE_BUREAU_RULES
        .iter()
        .find(|r| r.element == element)
        .unwrap_or(&FIVE_BUREAU_RULES[0])
}

/// Fixed description for any pattern name; empty for unknown names.
pub fn description_of(name: &str) -> &'static str {
    TRI_HARMONY_RULES
        .iter()
        .chain(&TRI_COMBINATION_RULES)
        .chain(&FIVE_BUREAU_RULES)
        .chain(&PAIRED_RULES)
        .find(|r| r.name == name)
        .map_or("", |r| r.description)
}

/// Secondary matches grouped by family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SecondaryCombinations {
    pub bureau: Vec<&'static str>,
    /// Tri-harmony and tri-combination names.
    pub triad: Vec<&'static str>,
    pub pair: Vec<&'static str>,
}

/// Result of combination detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CombinationReport {
    /// Dominant pattern name, empty when nothing matched.
    pub dominant: &'static str,
    /// Description of the dominant pattern, empty when nothing matched.
    pub description: &'static str,
    pub secondary: SecondaryCombinations,
    /// Every match in priority order, dominant first.
    #[serde(skip)]
    pub matches: Vec<CombinationRule>,
}

impl CombinationReport {
    pub fn dominant_kind(&self) -> Option<CombinationKind> {
        self.matches.first().map(|r| r.kind)
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// All matches in priority order.
pub fn find_combinations(branches: &[Branch]) -> Vec<CombinationRule> {
    let triads: Vec<CombinationRule> = TRI_HARMONY_RULES
        .iter()
        .chain(&TRI_COMBINATION_RULES)
        .filter(|r| r.matches(branches))
        .copied()
        .collect();

    let mut bureaus: Vec<CombinationRule> = Vec::new();
    for triad in &triads {
        let bureau = *bureau_for(triad.element);
        if !bureaus.contains(&bureau) {
            bureaus.push(bureau);
        }
    }

    let pairs = PAIRED_RULES.iter().filter(|r| r.matches(branches)).copied();

    triads.into_iter().chain(bureaus).chain(pairs).collect()
}

/// Detect combination patterns among the chart's branches.
pub fn detect_combinations(chart: &FourPillars) -> CombinationReport {
    let matches = find_combinations(&chart.branches());
    let Some((dominant, rest)) = matches.split_first() else {
        return CombinationReport::default();
    };

    let mut secondary = SecondaryCombinations::default();
    for r in rest {
        match r.kind {
            TriHarmony | TriCombination => secondary.triad.push(r.name),
            FiveBureau => secondary.bureau.push(r.name),
            PairedCombination => secondary.pair.push(r.name),
        }
    }

    CombinationReport {
        dominant: dominant.name,
        description: dominant.description,
        secondary,
        matches,
    }
}
