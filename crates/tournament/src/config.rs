//! Run configuration for simulated tournaments

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use tab_core::PairingConfig;

pub const DEFAULT_TEAMS: u32 = 20;

/// Settings for one simulated tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of teams, numbered from 1
    pub teams: u32,
    /// Seed for every random source; `None` draws from entropy
    pub seed: Option<u64>,
    /// Consecutive teams grouped into one program (0 or 1 = no programs)
    pub program_size: usize,
    pub pairing: PairingConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            teams: DEFAULT_TEAMS,
            seed: None,
            program_size: 0,
            pairing: PairingConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Load a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Every round pairs the whole field, so it must split evenly.
    pub fn validate(&self) -> Result<()> {
        if self.teams < 2 {
            bail!("A tournament needs at least 2 teams, got {}", self.teams);
        }
        if self.teams % 2 != 0 {
            bail!("Team count must be even, got {}", self.teams);
        }
        Ok(())
    }
}
