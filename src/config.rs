// File: ./src/config.rs
// Handles extraction configuration loading and defaults.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_true() -> bool {
    true
}

/// The organization's own domains, matched as case-insensitive suffixes of
/// attendee addresses. Overridable per run; these are the historical
/// defaults the tool shipped with.
fn default_internal_domains() -> Vec<String> {
    [
        "ten10.com",
        "scalefactory.com",
        "thetestpeople.com",
        "group.calendar.google.com",
        "resource.calendar.google.com",
    ]
    .iter()
    .map(|d| d.to_string())
    .collect()
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// Attendee email domains treated as internal for classification.
    #[serde(default = "default_internal_domains")]
    pub internal_domains: Vec<String>,

    /// Coerce every extracted string to 7-bit ASCII, replacing anything
    /// outside it with '?'. Disable to preserve the original text.
    #[serde(default = "default_true")]
    pub ascii_fold: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            internal_domains: default_internal_domains(),
            ascii_fold: true,
        }
    }
}

impl Config {
    /// Load a configuration file, with contextualized errors for reading and
    /// parsing failures.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }
}
