//! Solar/lunar calendar cross-reference, consumed as a lookup table.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::DataError;

/// Date conversion between the solar and lunar calendars.
///
/// Dates are `YYYY-MM-DD` strings on both sides. A missing key is a normal
/// "not found" result, not an error.
pub trait CalendarLookup: Send + Sync {
    fn solar_to_lunar(&self, solar: &str) -> Option<String>;
    fn lunar_to_solar(&self, lunar: &str) -> Option<String>;
}

/// Both directions of the lookup held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TableCalendar {
    #[serde(default)]
    solar_to_lunar: HashMap<String, String>,
    #[serde(default)]
    lunar_to_solar: HashMap<String, String>,
}

impl TableCalendar {
    /// Parse `{ "solar_to_lunar": {...}, "lunar_to_solar": {...} }`.
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON calendar table from disk.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let json = std::fs::read_to_string(path).map_err(|e| DataError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let table = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            solar = table.solar_to_lunar.len(),
            lunar = table.lunar_to_solar.len(),
            "loaded calendar table"
        );
        Ok(table)
    }

    pub fn insert(&mut self, solar: &str, lunar: &str) {
        self.solar_to_lunar.insert(solar.to_string(), lunar.to_string());
        self.lunar_to_solar.insert(lunar.to_string(), solar.to_string());
    }
}

impl CalendarLookup for TableCalendar {
    fn solar_to_lunar(&self, solar: &str) -> Option<String> {
        self.solar_to_lunar.get(solar.trim()).cloned()
    }

    fn lunar_to_solar(&self, lunar: &str) -> Option<String> {
        self.lunar_to_solar.get(lunar.trim()).cloned()
    }
}
