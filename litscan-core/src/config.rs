//! Configuration loading from litscan.toml.
//!
//! The config file supplies CLI defaults; command-line flags override it.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Main configuration structure for litscan.toml.
#[derive(Debug, Deserialize, Default)]
pub struct LitscanConfig {
    /// Exclusion pattern for file paths.
    pub ignore: Option<String>,
    /// Report threshold configuration.
    pub report: Option<ReportConfig>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Report threshold configuration.
#[derive(Debug, Deserialize, Default)]
pub struct ReportConfig {
    /// Report from how many occurrences.
    pub min_occurrences: Option<usize>,
    /// Minimum numeric value.
    pub min: Option<i64>,
    /// Maximum numeric value.
    pub max: Option<i64>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "text" or "json".
    pub format: Option<String>,
}

/// Loads configuration from litscan.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<LitscanConfig>> {
    let path = root.join("litscan.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid litscan.toml")?;
    Ok(Some(cfg))
}
