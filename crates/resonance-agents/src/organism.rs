//! Organism — a resonant agent that feeds on coherence.
//!
//! An organism owns one coherence estimator and a handful of smoothed
//! internal scalars. Each tick it:
//!
//! 1. measures coherence of the world signal through its own `K`,
//! 2. pulls `K` toward the swarm's best `K` when it is in need,
//! 3. updates need from its own coherence and the collective field,
//! 4. updates the optional fatigue, shield and memory channels,
//! 5. searches frequency space when hungry, plus a little diversity noise,
//! 6. moves on the torus with a pulse derived from its last coherence,
//! 7. records `{coherence, need, K}` in a bounded history.
//!
//! A strong collective field lowers need even when the organism's own
//! coherence is poor: social nutrition substitutes for self-coherence.

use crate::config::{Capabilities, OrganismConfig};
use resonance_core::agent::ResonantAgent;
use resonance_core::coherence::ema;
use resonance_core::error::Result;
use resonance_core::estimator::CoherenceEstimator;
use resonance_core::history::History;
use resonance_core::random::RandomSource;
use resonance_core::types::*;
use std::f64::consts::TAU;
use tracing::trace;

/// Range initial `K` values are drawn from.
pub const INITIAL_K_RANGE: (f64, f64) = (1.2, 2.8);

/// Need above which an organism adopts the swarm's resonance.
const SOCIAL_NEED: f64 = 0.4;
/// Need above which an organism searches frequency space.
const HUNGER_NEED: f64 = 0.5;
/// Coherence an organism is satisfied with.
const SATIATION: f64 = 0.7;
/// How much a full field lowers target need.
const FIELD_NUTRITION: f64 = 0.25;
/// Amplitude of the memory-driven hunger search.
const HUNGER_GAIN: f64 = 0.03;

const NEED_RETENTION: f64 = 0.9;
const FATIGUE_RETENTION: f64 = 0.95;
const SHIELD_RETENTION: f64 = 0.995;
const MEMORY_RETENTION: f64 = 0.95;

/// A configurable resonant organism.
#[derive(Debug, Clone, PartialEq)]
pub struct Organism {
    id: AgentId,
    position: Position,
    age_ticks: Tick,
    estimator: CoherenceEstimator,

    // Internal state
    need: f64,
    fatigue: f64,
    shield: f64,
    /// Smoothed (coherence, need, field strength).
    memory: [f64; 3],

    history: History<HistorySample>,
    config: OrganismConfig,
}

impl Organism {
    /// Create an organism at `position` with resonance `k`.
    pub fn new(
        id: AgentId,
        position: Position,
        k: f64,
        config: OrganismConfig,
    ) -> Result<Self> {
        config.validate()?;
        let history = History::new(config.history_capacity)?;
        Ok(Self {
            id,
            position,
            age_ticks: 0,
            estimator: CoherenceEstimator::new(k.clamp(K_MIN, K_MAX)),
            need: 0.0,
            fatigue: 0.0,
            shield: 1.0,
            memory: [0.0; 3],
            history,
            config,
        })
    }

    /// Create the organism at `index` with a random position and `K`.
    ///
    /// Draw order is x, y, then `K` from `k_range`.
    pub fn spawn<R: RandomSource + ?Sized>(
        index: usize,
        config: OrganismConfig,
        k_range: (f64, f64),
        rng: &mut R,
    ) -> Result<Self> {
        let x = rng.next_unit();
        let y = rng.next_unit();
        let k = rng.uniform(k_range.0, k_range.1);
        Self::new(AgentId::from_index(index), Position::new(x, y), k, config)
    }

    pub fn k(&self) -> f64 {
        self.estimator.k()
    }

    pub fn need(&self) -> f64 {
        self.need
    }

    pub fn fatigue(&self) -> f64 {
        self.fatigue
    }

    pub fn shield(&self) -> f64 {
        self.shield
    }

    pub fn memory(&self) -> [f64; 3] {
        self.memory
    }

    pub fn estimator(&self) -> &CoherenceEstimator {
        &self.estimator
    }

    pub fn history(&self) -> &History<HistorySample> {
        &self.history
    }

    pub fn config(&self) -> &OrganismConfig {
        &self.config
    }

    pub fn capabilities(&self) -> Capabilities {
        self.config.capabilities
    }

    /// Number of completed updates.
    pub fn age(&self) -> Tick {
        self.age_ticks
    }

    /// Set need directly (for testing).
    pub fn set_need(&mut self, need: f64) {
        self.need = need;
    }

    /// Motion pulse: `sin(2π · last coherence)`, scaled by shield when active.
    pub fn pulse(&self) -> f64 {
        (TAU * self.estimator.last_coherence()).sin() * self.pulse_gain()
    }

    fn pulse_gain(&self) -> f64 {
        if self.config.capabilities.shield {
            self.shield
        } else {
            1.0
        }
    }

    /// How strongly the hunger search is allowed to move `K`.
    fn search_damping(&self) -> f64 {
        if self.config.capabilities.shield {
            1.0 - self.shield
        } else {
            1.0
        }
    }
}

impl ResonantAgent for Organism {
    fn id(&self) -> &AgentId {
        &self.id
    }

    fn position(&self) -> Position {
        self.position
    }

    fn resonance(&self) -> f64 {
        self.estimator.k()
    }

    fn last_sample(&self) -> Option<&HistorySample> {
        self.history.last()
    }

    fn update<R: RandomSource + ?Sized>(
        &mut self,
        signal: &[f64],
        field: FieldState,
        rng: &mut R,
    ) -> Result<f64> {
        let reading = self.estimator.update(signal)?;
        let coherence = reading.coherence;
        let caps = self.config.capabilities;

        let mut k = self.estimator.k();

        // Social convergence
        if self.need > SOCIAL_NEED {
            k = ema(k, field.best_k, self.config.social_rate);
        }

        // Need and social nutrition
        let target_need = (SATIATION - coherence).max(0.0) - FIELD_NUTRITION * field.field_strength;
        self.need = ema(self.need, target_need, NEED_RETENTION);

        if caps.fatigue {
            let hit = if reading.breach { 1.0 } else { 0.0 };
            self.fatigue = ema(self.fatigue, hit, FATIGUE_RETENTION);
        }

        if caps.shield {
            self.shield = ema(self.shield, coherence, SHIELD_RETENTION);
        }

        if caps.memory {
            self.memory[0] = ema(self.memory[0], coherence, MEMORY_RETENTION);
            self.memory[1] = ema(self.memory[1], self.need, MEMORY_RETENTION);
            self.memory[2] = ema(self.memory[2], field.field_strength, MEMORY_RETENTION);
        }

        // Morphological hunger
        if self.need > HUNGER_NEED {
            if caps.memory {
                k += (self.memory[2] * 10.0).sin() * HUNGER_GAIN * self.search_damping();
            } else {
                let jitter = self.config.hunger_jitter;
                k += rng.uniform(-jitter, jitter);
            }
        }

        // Micro diversity
        let diversity = self.config.diversity;
        if diversity > 0.0 {
            k += rng.uniform(-diversity, diversity);
        }
        self.estimator.set_k(k.clamp(K_MIN, K_MAX));

        // Motion
        let pulse = self.pulse();
        let step = self.config.step_size;
        self.position.advance(pulse.cos() * step, pulse.sin() * step);

        self.history.push(HistorySample {
            coherence,
            need: self.need,
            k: self.estimator.k(),
        });
        self.age_ticks += 1;

        trace!(
            agent = %self.id,
            coherence,
            need = self.need,
            k = self.estimator.k(),
            breach = reading.breach,
            "organism updated"
        );

        Ok(coherence)
    }

    fn breached(&self) -> bool {
        self.estimator.last_breach()
    }

    fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            id: self.id.clone(),
            position: self.position,
            k: self.estimator.k(),
            need: self.need,
            fatigue: self.fatigue,
            shield: self.shield,
            history: self.history.to_vec(),
        }
    }
}
