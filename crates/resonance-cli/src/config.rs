//! Configuration management for the Resonance CLI.

use anyhow::{Context, Result};
use resonance::agents::organism::INITIAL_K_RANGE;
use resonance::core::signal::standard_harmonics;
use resonance::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name searched for in the current and parent directories.
pub const CONFIG_FILE: &str = "resonance.toml";

/// Resonance project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub swarm: SwarmSection,
    #[serde(default)]
    pub organism: OrganismSection,
    #[serde(default)]
    pub world: WorldSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwarmSection {
    #[serde(default = "default_population")]
    pub population: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_ticks")]
    pub ticks: u64,
    #[serde(default = "default_initial_k_min")]
    pub initial_k_min: f64,
    #[serde(default = "default_initial_k_max")]
    pub initial_k_max: f64,
    #[serde(default = "default_best_k")]
    pub initial_best_k: f64,
}

/// Organism profile: a variant preset plus optional per-field overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganismSection {
    #[serde(default = "default_variant")]
    pub variant: Variant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diversity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hunger_jitter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_capacity: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSection {
    #[serde(default = "standard_harmonics")]
    pub harmonics: Vec<Harmonic>,
}

// Default value functions
fn default_population() -> usize { 12 }
fn default_seed() -> u64 { 42 }
fn default_ticks() -> u64 { 500 }
fn default_initial_k_min() -> f64 { INITIAL_K_RANGE.0 }
fn default_initial_k_max() -> f64 { INITIAL_K_RANGE.1 }
fn default_best_k() -> f64 { DEFAULT_BEST_K }
fn default_variant() -> Variant { Variant::Sovereign }

impl Default for SwarmSection {
    fn default() -> Self {
        Self {
            population: default_population(),
            seed: default_seed(),
            ticks: default_ticks(),
            initial_k_min: default_initial_k_min(),
            initial_k_max: default_initial_k_max(),
            initial_best_k: default_best_k(),
        }
    }
}

impl Default for OrganismSection {
    fn default() -> Self {
        Self {
            variant: default_variant(),
            social_rate: None,
            diversity: None,
            hunger_jitter: None,
            step_size: None,
            history_capacity: None,
        }
    }
}

impl Default for WorldSection {
    fn default() -> Self {
        Self {
            harmonics: standard_harmonics(),
        }
    }
}

impl OrganismSection {
    /// The variant preset with any explicit overrides applied.
    pub fn resolve(&self) -> OrganismConfig {
        let mut config = self.variant.config();
        if let Some(v) = self.social_rate {
            config.social_rate = v;
        }
        if let Some(v) = self.diversity {
            config.diversity = v;
        }
        if let Some(v) = self.hunger_jitter {
            config.hunger_jitter = v;
        }
        if let Some(v) = self.step_size {
            config.step_size = v;
        }
        if let Some(v) = self.history_capacity {
            config.history_capacity = v;
        }
        config
    }
}

impl Config {
    /// Load config from resonance.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::load_from(&path)
            }
            None => {
                debug!("no {} found, using defaults", CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// The swarm configuration this file describes.
    pub fn swarm_config(&self) -> SwarmConfig {
        SwarmConfig {
            population: self.swarm.population,
            seed: self.swarm.seed,
            initial_k_min: self.swarm.initial_k_min,
            initial_k_max: self.swarm.initial_k_max,
            initial_best_k: self.swarm.initial_best_k,
            organism: self.organism.resolve(),
        }
    }

    /// A simulation builder primed with this configuration.
    pub fn builder(&self) -> SimulationBuilder {
        SimulationBuilder::new()
            .with_config(self.swarm_config())
            .harmonics(self.world.harmonics.clone())
    }
}

/// Find resonance.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let dir = std::env::current_dir().ok()?;
    find_config_from(dir)
}

fn find_config_from(mut dir: PathBuf) -> Option<PathBuf> {
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
