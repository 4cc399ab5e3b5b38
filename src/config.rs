//! Model settings, parsed from TOML text.
//!
//! Reading the file is left to the embedding application.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::ConflictPolicy;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub sub_locality: SubLocalityConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SubLocalityConfig {
    /// How to treat two different entries claiming the same level
    #[serde(default)]
    pub on_conflict: ConflictPolicy,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        Ok(config)
    }

    pub fn conflict_policy(&self) -> ConflictPolicy {
        self.sub_locality.on_conflict
    }
}
