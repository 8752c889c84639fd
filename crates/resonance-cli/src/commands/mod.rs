//! CLI command implementations.

pub mod init;
pub mod run;
pub mod trace;

use clap::Args;
use resonance::prelude::Variant;

use crate::config::Config;

/// Command-line overrides layered over resonance.toml.
#[derive(Args, Debug, Clone, Default)]
pub struct SwarmArgs {
    /// Number of ticks to run (default: from config)
    #[arg(short, long)]
    pub ticks: Option<u64>,

    /// Number of organisms
    #[arg(short, long)]
    pub population: Option<usize>,

    /// Random seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Organism variant: sovereign or minimal
    #[arg(long)]
    pub variant: Option<Variant>,
}

impl SwarmArgs {
    /// Apply the overrides that were given.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ticks) = self.ticks {
            config.swarm.ticks = ticks;
        }
        if let Some(population) = self.population {
            config.swarm.population = population;
        }
        if let Some(seed) = self.seed {
            config.swarm.seed = seed;
        }
        if let Some(variant) = self.variant {
            config.organism.variant = variant;
        }
    }
}
