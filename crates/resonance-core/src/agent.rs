//! ResonantAgent — the unit a swarm drives each tick.
//!
//! A swarm only needs three things from an agent: its current resonance
//! multiplier, the most recently recorded history sample (to decide flow
//! membership), and an update that consumes the shared world signal and the
//! swarm-level feedback computed before the tick.

use crate::error::Result;
use crate::random::RandomSource;
use crate::types::*;

/// An agent that can be stepped by a swarm.
pub trait ResonantAgent {
    /// The agent's identity.
    fn id(&self) -> &AgentId;

    /// The agent's current position on the torus.
    fn position(&self) -> Position;

    /// The agent's resonance multiplier `K`.
    fn resonance(&self) -> f64;

    /// The sample recorded at the end of the agent's last update, if any.
    fn last_sample(&self) -> Option<&HistorySample>;

    /// Whether the agent's most recently recorded coherence is above the
    /// flow threshold.
    fn in_flow(&self) -> bool {
        self.last_sample().map(HistorySample::in_flow).unwrap_or(false)
    }

    /// Execute one tick. Returns the coherence computed on this tick.
    ///
    /// An empty `signal` must fail without changing the agent.
    fn update<R: RandomSource + ?Sized>(
        &mut self,
        signal: &[f64],
        field: FieldState,
        rng: &mut R,
    ) -> Result<f64>;

    /// Whether the last update registered a breach.
    fn breached(&self) -> bool {
        false
    }

    /// Serializable view for presentation layers.
    fn snapshot(&self) -> AgentSnapshot;
}
