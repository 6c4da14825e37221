//! Five-element tally and per-pillar element breakdown.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::{FourPillars, Pillar, PillarPosition};
use crate::stem::Stem;

/// Stems and branches in a chart: 4 of each.
pub const VISIBLE_SYMBOL_COUNT: u32 = 8;

/// Occurrence count per element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ElementTally {
    counts: [u32; 5],
}

impl ElementTally {
    pub fn add(&mut self, element: Element) {
        self.counts[element.index() as usize] += 1;
    }

    pub fn get(&self, element: Element) -> u32 {
        self.counts[element.index() as usize]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// (element, count) pairs in tally order (金 木 水 火 土).
    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        ALL_ELEMENTS.iter().map(|e| (*e, self.get(*e)))
    }

    /// Elements with a zero count.
    pub fn missing(&self) -> Vec<Element> {
        self.iter().filter(|(_, n)| *n == 0).map(|(e, _)| e).collect()
    }

    /// Element(s) with the highest count.
    pub fn strongest(&self) -> Vec<Element> {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        self.iter().filter(|(_, n)| *n == max).map(|(e, _)| e).collect()
    }
}

impl Serialize for ElementTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALL_ELEMENTS.len()))?;
        for (e, n) in self.iter() {
            map.serialize_entry(e.symbol(), &n)?;
        }
        map.end()
    }
}

/// Count elements over stems and branches, optionally adding every hidden
/// stem of every branch.
pub fn tally(chart: &FourPillars, include_hidden: bool) -> ElementTally {
    let mut out = ElementTally::default();
    for pillar in chart.pillars() {
        out.add(pillar.stem.element());
        out.add(pillar.branch.element());
        if include_hidden {
            for stem in pillar.branch.hidden_stems() {
                out.add(stem.element());
            }
        }
    }
    out
}

/// Tally over the 8 visible stems and branches.
pub fn analyze_wuxing_simple(chart: &FourPillars) -> ElementTally {
    tally(chart, false)
}

/// Tally over stems, branches and all hidden stems.
pub fn analyze_wuxing_full(chart: &FourPillars) -> ElementTally {
    tally(chart, true)
}

/// Total number of hidden stems stored in the chart's 4 branches.
pub fn hidden_stem_count(chart: &FourPillars) -> u32 {
    chart
        .branches()
        .iter()
        .map(|b| b.hidden_stems().len() as u32)
        .sum()
}

/// A hidden stem with its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiddenStem {
    pub stem: Stem,
    pub element: Element,
}

/// Element view of one pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarBreakdown {
    pub stem_element: Element,
    pub branch_element: Element,
    /// Hidden stems of the branch in storage order.
    pub hidden: Vec<HiddenStem>,
}

impl PillarBreakdown {
    pub fn of(pillar: Pillar) -> Self {
        Self {
            stem_element: pillar.stem.element(),
            branch_element: pillar.branch.element(),
            hidden: pillar
                .branch
                .hidden_stems()
                .iter()
                .map(|s| HiddenStem {
                    stem: *s,
                    element: s.element(),
                })
                .collect(),
        }
    }
}

/// Element breakdown keyed by chart position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBreakdown {
    pub year: PillarBreakdown,
    pub month: PillarBreakdown,
    pub day: PillarBreakdown,
    pub hour: PillarBreakdown,
}

impl ChartBreakdown {
    pub fn get(&self, position: PillarPosition) -> &PillarBreakdown {
        match position {
            PillarPosition::Year => &self.year,
            PillarPosition::Month => &self.month,
            PillarPosition::Day => &self.day,
            PillarPosition::Hour => &self.hour,
        }
    }
}

/// Per-pillar stem element, branch element and hidden stems.
pub fn breakdown(chart: &FourPillars) -> ChartBreakdown {
    ChartBreakdown {
        year: PillarBreakdown::of(chart.year),
        month: PillarBreakdown::of(chart.month),
        day: PillarBreakdown::of(chart.day),
        hour: PillarBreakdown::of(chart.hour),
    }
}
