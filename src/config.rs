//! Runtime configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Result;

/// Top-level configuration. Every field has a default, so `{}` is a
/// valid configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON dataset to load.
    pub dataset_path: Option<PathBuf>,
    /// Run sibling derivation when building a graph from the catalog.
    pub derive_siblings: bool,
    pub analysis: AnalysisConfig,
}

/// Parameters for the aggregate series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// How many actors the hub series keeps.
    pub hub_count: usize,
    /// Movies released in or before this year are left out of the decade series.
    pub min_decade_year: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: None,
            derive_siblings: true,
            analysis: AnalysisConfig::default(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { hub_count: 10, min_decade_year: 1800 }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
