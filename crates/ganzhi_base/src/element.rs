//! Five elements (wuxing) and yin-yang polarity.
//!
//! Two directed cycles relate the elements:
//! - generation: Wood → Fire → Earth → Metal → Water → Wood
//! - domination: Wood → Earth → Water → Fire → Metal → Wood

use serde::Serialize;

/// The five elements, in the order used for tally output (金 木 水 火 土).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

/// All 5 elements in tally order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Metal,
    Element::Wood,
    Element::Water,
    Element::Fire,
    Element::Earth,
];

impl Element {
    /// Chinese symbol of the element.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Metal => "金",
            Self::Wood => "木",
            Self::Water => "水",
            Self::Fire => "火",
            Self::Earth => "土",
        }
    }

    /// English name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Metal => "Metal",
            Self::Wood => "Wood",
            Self::Water => "Water",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
        }
    }

    /// 0-based index in tally order (Metal=0 .. Earth=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Metal => 0,
            Self::Wood => 1,
            Self::Water => 2,
            Self::Fire => 3,
            Self::Earth => 4,
        }
    }

    /// Parse a single-character element symbol.
    pub fn from_symbol(s: &str) -> Option<Self> {
        ALL_ELEMENTS.into_iter().find(|e| e.symbol() == s)
    }

    /// The element this one generates.
    pub const fn generates(self) -> Self {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element that generates this one.
    pub const fn generated_by(self) -> Self {
        match self {
            Self::Fire => Self::Wood,
            Self::Earth => Self::Fire,
            Self::Metal => Self::Earth,
            Self::Water => Self::Metal,
            Self::Wood => Self::Water,
        }
    }

    /// The element this one dominates.
    pub const fn dominates(self) -> Self {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// The element that dominates this one.
    pub const fn dominated_by(self) -> Self {
        match self {
            Self::Earth => Self::Wood,
            Self::Water => Self::Earth,
            Self::Fire => Self::Water,
            Self::Metal => Self::Fire,
            Self::Wood => Self::Metal,
        }
    }
}

/// Yin-yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Chinese symbol (阳 / 阴).
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }

    /// Polarity of a cyclic index: even = Yang, odd = Yin.
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}
