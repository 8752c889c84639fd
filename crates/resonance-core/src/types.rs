//! Shared types used across the resonance crates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the resonance multiplier `K`.
pub const K_MIN: f64 = 0.5;
/// Upper bound of the resonance multiplier `K`.
pub const K_MAX: f64 = 3.5;

/// Coherence above which an agent counts as being "in flow".
pub const FLOW_THRESHOLD: f64 = 0.75;

/// Monotonic simulation tick counter.
pub type Tick = u64;

/// Unique, human-readable identifier for an agent in the swarm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The conventional id for the agent at `index` in a swarm (`S0`, `S1`, ...).
    pub fn from_index(index: usize) -> Self {
        Self(format!("S{}", index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fold a value onto the unit interval `[0, 1)`.
///
/// Euclidean remainder can round up to exactly 1.0 for tiny negative
/// inputs; that case is folded back to 0.0.
pub fn wrap_unit(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// A position on the unit torus. Both coordinates live in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a position, wrapping both coordinates onto the torus.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: wrap_unit(x),
            y: wrap_unit(y),
        }
    }

    /// Move by `(dx, dy)` and wrap around the torus edges.
    pub fn advance(&mut self, dx: f64, dy: f64) {
        self.x = wrap_unit(self.x + dx);
        self.y = wrap_unit(self.y + dy);
    }

    /// Shortest distance between two points on the torus.
    pub fn toroidal_distance(&self, other: &Position) -> f64 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        let dx = dx.min(1.0 - dx);
        let dy = dy.min(1.0 - dy);
        (dx * dx + dy * dy).sqrt()
    }
}

/// One recorded tick of an agent's time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistorySample {
    /// Coherence computed on that tick.
    pub coherence: f64,
    /// Need after that tick's update.
    pub need: f64,
    /// Resonance multiplier after that tick's update.
    pub k: f64,
}

impl HistorySample {
    pub fn in_flow(&self) -> bool {
        self.coherence > FLOW_THRESHOLD
    }
}

/// Swarm-level feedback handed to every agent on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldState {
    /// Mean `K` of the agents in flow (population resonance target).
    pub best_k: f64,
    /// Fraction of the population in flow, in `[0, 1]`.
    pub field_strength: f64,
}

impl FieldState {
    pub fn new(best_k: f64, field_strength: f64) -> Self {
        Self {
            best_k,
            field_strength,
        }
    }
}

/// A serializable snapshot of one agent, read by presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentSnapshot {
    pub id: AgentId,
    pub position: Position,
    pub k: f64,
    pub need: f64,
    pub fatigue: f64,
    pub shield: f64,
    pub history: Vec<HistorySample>,
}

/// A complete serializable snapshot of the swarm at the end of a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwarmSnapshot {
    pub tick: Tick,
    pub field: FieldState,
    pub agents: Vec<AgentSnapshot>,
}
