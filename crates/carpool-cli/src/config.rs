//! Application configuration management.
//!
//! Holds the scoring weights handed to the engine and the default log
//! filter. Configuration is read from `~/.config/carpool/config.json`, or
//! from the path in `CARPOOL_CONFIG` when set. A missing file means
//! defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use carpool_core::ScoringWeights;
use serde::{Deserialize, Serialize};

/// Application name used for the config directory path
const APP_NAME: &str = "carpool";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable that overrides the config file location
const CONFIG_ENV: &str = "CARPOOL_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub scoring: ScoringWeights,
    /// Used when RUST_LOG is not set, e.g. "carpool_core=debug"
    pub log_filter: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
