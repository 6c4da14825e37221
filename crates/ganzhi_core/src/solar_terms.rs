//! Solar-term provider: per-year term instants, consumed as data.

use std::collections::BTreeMap;
use std::path::Path;

use ganzhi_base::{SolarTerm, SolarTermSet};
use ganzhi_time::CivilTime;
use tracing::{debug, info};

use crate::error::DataError;

/// Source of precomputed solar-term instants.
pub trait SolarTermProvider: Send + Sync {
    /// All known terms of a civil year (up to 24). Years the source does
    /// not cover yield an empty set.
    fn solar_terms(&self, year: i32) -> Result<SolarTermSet, DataError>;

    /// Terms of a year, optionally reduced to the 12 Jie terms.
    fn terms(&self, year: i32, jie_only: bool) -> Result<SolarTermSet, DataError> {
        let set = self.solar_terms(year)?;
        Ok(if jie_only { set.jie_only() } else { set })
    }
}

/// In-memory term table keyed by civil year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSolarTerms {
    years: BTreeMap<i32, SolarTermSet>,
}

impl TableSolarTerms {
    pub fn from_sets(sets: impl IntoIterator<Item = SolarTermSet>) -> Self {
        Self {
            years: sets.into_iter().map(|s| (s.year(), s)).collect(),
        }
    }

    /// Parse `{ "1997": { "小寒": "1997-01-05 16:24:00", ... }, ... }`.
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let raw: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(json)?;
        let mut years = BTreeMap::new();
        for (year_key, entries) in raw {
            let year: i32 = year_key
                .trim()
                .parse()
                .map_err(|_| DataError::InvalidYear(year_key.clone()))?;
            let mut set = SolarTermSet::new(year);
            for (name, at) in entries {
                let term = SolarTerm::from_symbol(name.trim())
                    .ok_or_else(|| DataError::UnknownTerm(name.clone()))?;
                set.insert(term, at.parse::<CivilTime>()?);
            }
            years.insert(year, set);
        }
        Ok(Self { years })
    }

    /// Load a JSON term table from disk.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let json = std::fs::read_to_string(path).map_err(|e| DataError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let table = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            years = table.years.len(),
            "loaded solar term table"
        );
        Ok(table)
    }

    /// Covered years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

impl SolarTermProvider for TableSolarTerms {
    fn solar_terms(&self, year: i32) -> Result<SolarTermSet, DataError> {
        match self.years.get(&year) {
            Some(set) => Ok(set.clone()),
            None => {
                debug!(year, "year not covered by solar term table");
                Ok(SolarTermSet::new(year))
            }
        }
    }
}
