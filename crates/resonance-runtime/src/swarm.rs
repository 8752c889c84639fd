//! Swarm — population management and field aggregation.
//!
//! The swarm is the collective. It owns a fixed population of agents and,
//! once per tick:
//!
//! 1. Validates the world signal (an empty signal fails before anything moves)
//! 2. Collects the agents in flow, judged by their last *recorded* coherence
//! 3. Recomputes the field: `best_k` = mean `K` of the flow set (kept from the
//!    previous tick when nobody is in flow), `field_strength` = flow fraction
//! 4. Updates every agent with the same field snapshot
//!
//! The feedback is one tick delayed: the field driving tick *t* comes from
//! state observed at the end of tick *t − 1*. No agent reads another agent's
//! state during the update loop.

use resonance_agents::config::OrganismConfig;
use resonance_agents::organism::{Organism, INITIAL_K_RANGE};
use resonance_core::agent::ResonantAgent;
use resonance_core::error::{check_signal, ResonanceError, Result};
use resonance_core::random::RandomSource;
use resonance_core::types::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Initial population resonance target (the golden ratio).
pub const DEFAULT_BEST_K: f64 = 1.618;

/// Summary of one completed tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepReport {
    /// Tick count after this step.
    pub tick: Tick,
    /// Field every agent observed during this step.
    pub field: FieldState,
    /// Agents that were in flow going into this step.
    pub flow_count: usize,
    /// Agents whose estimator registered a breach on this step.
    pub breaches: usize,
    /// Mean coherence computed on this step.
    pub mean_coherence: f64,
}

/// Configuration for swarm construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwarmConfig {
    /// Number of agents (default: 12).
    pub population: usize,
    /// Seed for the random source (default: 42).
    pub seed: u64,
    /// Lower bound of initial `K` (default: 1.2).
    pub initial_k_min: f64,
    /// Upper bound of initial `K` (default: 2.8).
    pub initial_k_max: f64,
    /// `best_k` before any agent reaches flow (default: 1.618).
    pub initial_best_k: f64,
    /// Per-organism parameters.
    pub organism: OrganismConfig,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            population: 12,
            seed: 42,
            initial_k_min: INITIAL_K_RANGE.0,
            initial_k_max: INITIAL_K_RANGE.1,
            initial_best_k: DEFAULT_BEST_K,
            organism: OrganismConfig::sovereign(),
        }
    }
}

impl SwarmConfig {
    /// Check every parameter, failing on the first invalid one.
    pub fn validate(&self) -> Result<()> {
        if self.population == 0 {
            return Err(ResonanceError::invalid_config(
                "population",
                "0",
                "a swarm needs at least one agent",
            ));
        }
        for (field, value) in [
            ("initial_k_min", self.initial_k_min),
            ("initial_k_max", self.initial_k_max),
            ("initial_best_k", self.initial_best_k),
        ] {
            if !(K_MIN..=K_MAX).contains(&value) {
                return Err(ResonanceError::out_of_range(field, K_MIN, K_MAX, value));
            }
        }
        if self.initial_k_min > self.initial_k_max {
            return Err(ResonanceError::invalid_config(
                "initial_k_min",
                self.initial_k_min.to_string(),
                "must not exceed initial_k_max",
            ));
        }
        self.organism.validate()
    }
}

/// A fixed population of resonant agents coupled through a shared field.
#[derive(Debug, Clone)]
pub struct Swarm<A = Organism> {
    agents: Vec<A>,
    best_k: f64,
    field_strength: f64,
    tick: Tick,
}

impl Swarm<Organism> {
    /// Spawn `config.population` organisms with random positions and `K`.
    ///
    /// Draws happen agent by agent: x, y, then `K`.
    pub fn new<R: RandomSource + ?Sized>(config: &SwarmConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let k_range = (config.initial_k_min, config.initial_k_max);
        let agents = (0..config.population)
            .map(|i| Organism::spawn(i, config.organism.clone(), k_range, &mut *rng))
            .collect::<Result<Vec<_>>>()?;
        Self::from_agents(agents, config.initial_best_k)
    }
}

impl<A: ResonantAgent> Swarm<A> {
    /// Assemble a swarm from pre-built agents.
    pub fn from_agents(agents: Vec<A>, initial_best_k: f64) -> Result<Self> {
        if agents.is_empty() {
            return Err(ResonanceError::invalid_config(
                "population",
                "0",
                "a swarm needs at least one agent",
            ));
        }
        if !initial_best_k.is_finite() {
            return Err(ResonanceError::invalid_config(
                "initial_best_k",
                initial_best_k.to_string(),
                "must be finite",
            ));
        }
        Ok(Self {
            agents,
            best_k: initial_best_k,
            field_strength: 0.0,
            tick: 0,
        })
    }

    /// Advance every agent by one tick.
    ///
    /// Fails with an invalid-input error on an empty signal, before the
    /// field or any agent is touched.
    pub fn step<R: RandomSource + ?Sized>(&mut self, signal: &[f64], rng: &mut R) -> Result<StepReport> {
        if let Err(err) = check_signal(signal) {
            warn!(tick = self.tick, error = %err, "rejected world signal");
            return Err(err);
        }

        let was_flowing = self.field_strength > 0.0;
        let (flow_count, flow_k_sum) = self
            .agents
            .iter()
            .filter(|a| a.in_flow())
            .fold((0usize, 0.0), |(n, sum), a| (n + 1, sum + a.resonance()));

        if flow_count > 0 {
            self.best_k = flow_k_sum / flow_count as f64;
            self.field_strength = flow_count as f64 / self.agents.len() as f64;
        } else {
            self.field_strength = 0.0;
        }

        match (was_flowing, flow_count > 0) {
            (false, true) => info!(
                tick = self.tick,
                flow_count,
                best_k = self.best_k,
                "coherence field formed"
            ),
            (true, false) => info!(tick = self.tick, "coherence field collapsed"),
            _ => {}
        }

        let field = self.field();
        let mut coherence_sum = 0.0;
        let mut breaches = 0;
        for agent in &mut self.agents {
            coherence_sum += agent.update(signal, field, rng)?;
            if agent.breached() {
                breaches += 1;
            }
        }
        self.tick += 1;

        let report = StepReport {
            tick: self.tick,
            field,
            flow_count,
            breaches,
            mean_coherence: coherence_sum / self.agents.len() as f64,
        };
        debug!(
            tick = report.tick,
            flow_count,
            field_strength = field.field_strength,
            best_k = field.best_k,
            breaches,
            mean_coherence = report.mean_coherence,
            "swarm stepped"
        );
        Ok(report)
    }

    /// The field as of the most recent step.
    pub fn field(&self) -> FieldState {
        FieldState::new(self.best_k, self.field_strength)
    }

    pub fn best_k(&self) -> f64 {
        self.best_k
    }

    pub fn field_strength(&self) -> f64 {
        self.field_strength
    }

    /// Number of completed steps.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn agents(&self) -> &[A] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Always false for a constructed swarm.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Agents whose last recorded coherence is above the flow threshold.
    pub fn flow_count(&self) -> usize {
        self.agents.iter().filter(|a| a.in_flow()).count()
    }

    /// Serializable view of the whole swarm.
    pub fn snapshot(&self) -> SwarmSnapshot {
        SwarmSnapshot {
            tick: self.tick,
            field: self.field(),
            agents: self.agents.iter().map(|a| a.snapshot()).collect(),
        }
    }
}
