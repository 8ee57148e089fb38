//! TOML configuration.
//!
//! ```toml
//! [db]
//! path = "./data/summit.sqlite"
//!
//! [home]
//! label = "Tacoma"
//!
//! [input]
//! keyword_max_chars = 24
//! ```
//!
//! Only `[db]` is required; the other sections fall back to defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use summit_core::criteria::InputLimits;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub db: DbConfig,
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HomeConfig {
    #[serde(default = "default_home_label")]
    pub label: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            label: default_home_label(),
        }
    }
}

fn default_home_label() -> String {
    "Tacoma".to_string()
}

/// Length caps for raw search input.
#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    #[serde(default = "default_keyword_max_chars")]
    pub keyword_max_chars: usize,
    #[serde(default = "default_distance_max_chars")]
    pub distance_max_chars: usize,
    #[serde(default = "default_elevation_max_chars")]
    pub elevation_max_chars: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            keyword_max_chars: default_keyword_max_chars(),
            distance_max_chars: default_distance_max_chars(),
            elevation_max_chars: default_elevation_max_chars(),
        }
    }
}

fn default_keyword_max_chars() -> usize {
    24
}
fn default_distance_max_chars() -> usize {
    4
}
fn default_elevation_max_chars() -> usize {
    5
}

impl InputConfig {
    pub fn limits(&self) -> InputLimits {
        InputLimits {
            keyword_max_chars: self.keyword_max_chars,
            distance_max_chars: self.distance_max_chars,
            elevation_max_chars: self.elevation_max_chars,
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.home.label.trim().is_empty() {
        anyhow::bail!("home.label must not be empty");
    }

    if config.input.keyword_max_chars == 0 {
        anyhow::bail!("input.keyword_max_chars must be > 0");
    }
    if config.input.distance_max_chars == 0 {
        anyhow::bail!("input.distance_max_chars must be > 0");
    }
    if config.input.elevation_max_chars == 0 {
        anyhow::bail!("input.elevation_max_chars must be > 0");
    }

    Ok(config)
}
