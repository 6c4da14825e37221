//! TOML configuration: data table paths, luck-cycle defaults and the log
//! filter.
//!
//! ```toml
//! [data]
//! solar_terms = "data/solar_terms.json"
//! calendar = "data/calendar.json"
//!
//! [luck]
//! count = 8
//!
//! [log]
//! filter = "ganzhi=info"
//! ```
//!
//! Every section and key is optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors from reading or validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
    #[error("invalid config TOML: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Locations of the provider tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    #[serde(default)]
    pub solar_terms: Option<PathBuf>,
    #[serde(default)]
    pub calendar: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LuckConfig {
    /// Number of cycles generated when none is requested.
    #[serde(default = "default_luck_count")]
    pub count: u32,
}

impl Default for LuckConfig {
    fn default() -> Self {
        Self {
            count: default_luck_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_luck_count() -> u32 {
    8
}

fn default_log_filter() -> String {
    "ganzhi=info".to_string()
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub luck: LuckConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file. Relative data paths are
    /// resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(dir) = path.parent() {
            config.data.resolve_relative(dir);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.luck.count == 0 {
            return Err(ConfigError::Invalid("luck.count must be greater than zero"));
        }
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log.filter must not be empty"));
        }
        for path in [&self.data.solar_terms, &self.data.calendar].into_iter().flatten() {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("data paths must not be empty"));
            }
        }
        Ok(())
    }
}

impl DataConfig {
    fn resolve_relative(&mut self, base: &Path) {
        for path in [&mut self.solar_terms, &mut self.calendar].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
