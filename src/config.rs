use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "epiweek.toml";

/// Top-level epiweek configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EpiweekConfig {
    /// Compose settings.
    #[serde(default)]
    pub compose: ComposeToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComposeToml {
    #[serde(default = "default_convention")]
    pub convention: String,
    #[serde(default = "default_weekday")]
    pub weekday: i32,
    #[serde(default = "default_broadcast")]
    pub broadcast: String,
    #[serde(default = "default_week53")]
    pub week53: String,
}

impl Default for ComposeToml {
    fn default() -> Self {
        Self {
            convention: default_convention(),
            weekday: default_weekday(),
            broadcast: default_broadcast(),
            week53: default_week53(),
        }
    }
}

fn default_convention() -> String {
    "who".to_string()
}
fn default_weekday() -> i32 {
    1
}
fn default_broadcast() -> String {
    "recycle".to_string()
}
fn default_week53() -> String {
    "roll".to_string()
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, `epiweek.toml` in the working
/// directory is used if present, and built-in defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<EpiweekConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_PATH);
            if !fallback.is_file() {
                return Ok(EpiweekConfig::default());
            }
            fallback
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}
