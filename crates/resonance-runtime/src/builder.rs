//! Simulation builder.
//!
//! Collects construction parameters fluently and validates them all at
//! `build()`, so misconfiguration fails before the first tick.
//!
//! # Example
//!
//! ```rust
//! use resonance_runtime::builder::SimulationBuilder;
//! use resonance_agents::config::Variant;
//!
//! let mut sim = SimulationBuilder::new()
//!     .population(8)
//!     .seed(7)
//!     .variant(Variant::Minimal)
//!     .build()
//!     .unwrap();
//!
//! sim.run(50).unwrap();
//! assert_eq!(sim.swarm().tick(), 50);
//! ```

use crate::simulation::Simulation;
use crate::swarm::SwarmConfig;
use resonance_agents::config::{Capabilities, OrganismConfig, Variant};
use resonance_core::error::Result;
use resonance_core::random::{RandomSource, SwarmRng};
use resonance_core::signal::{Harmonic, WorldSignal};

/// Builder for simulations.
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    config: SwarmConfig,
    harmonics: Option<Vec<Harmonic>>,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    /// Start from the default swarm configuration and the standard world signal.
    pub fn new() -> Self {
        Self {
            config: SwarmConfig::default(),
            harmonics: None,
        }
    }

    /// Replace the whole swarm configuration.
    pub fn with_config(mut self, config: SwarmConfig) -> Self {
        self.config = config;
        self
    }

    pub fn population(mut self, population: usize) -> Self {
        self.config.population = population;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Switch every organism to a preset profile.
    pub fn variant(mut self, variant: Variant) -> Self {
        self.config.organism = variant.config();
        self
    }

    pub fn organism(mut self, organism: OrganismConfig) -> Self {
        self.config.organism = organism;
        self
    }

    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.config.organism.capabilities = capabilities;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.organism.history_capacity = capacity;
        self
    }

    /// Range the initial `K` of every organism is drawn from.
    pub fn initial_k_range(mut self, min: f64, max: f64) -> Self {
        self.config.initial_k_min = min;
        self.config.initial_k_max = max;
        self
    }

    pub fn initial_best_k(mut self, best_k: f64) -> Self {
        self.config.initial_best_k = best_k;
        self
    }

    /// Use a custom harmonic bank instead of the standard three tones.
    pub fn harmonics(mut self, harmonics: Vec<Harmonic>) -> Self {
        self.harmonics = Some(harmonics);
        self
    }

    /// The configuration as accumulated so far.
    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    fn world(&self) -> Result<WorldSignal> {
        match &self.harmonics {
            Some(h) => WorldSignal::new(h.clone()),
            None => Ok(WorldSignal::standard()),
        }
    }

    /// Build a simulation seeded from the configured seed.
    pub fn build(self) -> Result<Simulation<SwarmRng>> {
        let world = self.world()?;
        Simulation::new(&self.config, world)
    }

    /// Build a simulation around an explicit random source. The configured
    /// seed is ignored.
    pub fn build_with_rng<R: RandomSource>(self, rng: R) -> Result<Simulation<R>> {
        let world = self.world()?;
        Simulation::with_rng(&self.config, world, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resonance_core::error::ResonanceError;

    #[test]
    fn builds_with_defaults() {
        let sim = SimulationBuilder::new().build().unwrap();
        assert_eq!(sim.swarm().len(), 12);
        assert_eq!(sim.world().width(), 3);
    }

    #[test]
    fn zero_population_fails_at_build() {
        let err = SimulationBuilder::new().population(0).build().err().unwrap();
        assert!(matches!(err, ResonanceError::Config(_)));
    }

    #[test]
    fn zero_history_capacity_fails_at_build() {
        assert!(SimulationBuilder::new().history_capacity(0).build().is_err());
    }

    #[test]
    fn empty_harmonics_fail_at_build() {
        assert!(SimulationBuilder::new().harmonics(Vec::new()).build().is_err());
    }

    #[test]
    fn variant_sets_organism_profile() {
        let sim = SimulationBuilder::new()
            .population(2)
            .variant(Variant::Minimal)
            .build()
            .unwrap();
        for agent in sim.swarm().agents() {
            assert_eq!(agent.capabilities(), Capabilities::minimal());
            assert_eq!(agent.history().capacity(), 100);
        }
    }

    #[test]
    fn custom_harmonics_are_used() {
        let sim = SimulationBuilder::new()
            .harmonics(vec![Harmonic::new(0.2, 0.0), Harmonic::new(0.5, 1.0)])
            .build()
            .unwrap();
        assert_eq!(sim.world().width(), 2);
    }
}
