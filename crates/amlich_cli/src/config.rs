use std::path::Path;

use amlich_rs::CalendarConfig;
use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "amlich.toml";

/// Contents of `amlich.toml`.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AmlichToml {
    /// UTC offset in hours; Vietnam (7.0) when absent.
    #[serde(default)]
    pub time_zone_hours: Option<f64>,
}

impl AmlichToml {
    /// Load the config file.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&toml_str).with_context(|| format!("in {}", path.display()))
    }

    /// Parse TOML text.
    pub fn parse(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("failed to parse TOML config")
    }

    /// Calendar config with the `--tz` override applied.
    pub fn calendar_config(&self, tz_override: Option<f64>) -> Result<CalendarConfig> {
        match tz_override.or(self.time_zone_hours) {
            Some(hours) => CalendarConfig::new(hours).context("invalid time zone"),
            None => Ok(CalendarConfig::vietnam()),
        }
    }
}
