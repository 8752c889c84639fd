//! Aggregate metrics describing the state of a swarm.
//!
//! Computes population-level summaries from the organisms' current state:
//! - Field: flow count, field strength, best `K`
//! - Internal state: mean coherence, need, fatigue, shield
//! - Resonance spread: mean and standard deviation of `K`
//! - Clustering: mean toroidal distance to the nearest neighbour
//! - Breaches: lifetime total and on the latest tick

use crate::swarm::Swarm;
use resonance_agents::organism::Organism;
use resonance_core::agent::ResonantAgent;
use resonance_core::types::Tick;
use serde::Serialize;

/// Population-level summary of a swarm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwarmMetrics {
    pub tick: Tick,
    pub population: usize,
    /// Agents whose last recorded coherence is above the flow threshold.
    pub flow_count: usize,
    pub field_strength: f64,
    pub best_k: f64,
    /// Mean of the last recorded coherence (0 before the first tick).
    pub mean_coherence: f64,
    pub mean_need: f64,
    pub mean_fatigue: f64,
    pub mean_shield: f64,
    pub mean_k: f64,
    /// Population standard deviation of `K`; 0 means full convergence.
    pub k_spread: f64,
    /// Mean distance from each organism to its nearest neighbour on the
    /// torus (0 with fewer than two organisms).
    pub mean_neighbor_distance: f64,
    /// Breaches across all agents over the whole run.
    pub total_breaches: u64,
    /// Agents that breached on the latest tick.
    pub breaching_now: usize,
}

/// Compute metrics from the swarm's current state.
pub fn compute(swarm: &Swarm<Organism>) -> SwarmMetrics {
    let agents = swarm.agents();

    let mean_coherence = mean_of(agents, |a| a.last_sample().map(|s| s.coherence).unwrap_or(0.0));
    let mean_k = mean_of(agents, Organism::k);
    let k_spread = mean_of(agents, |a| (a.k() - mean_k).powi(2)).sqrt();

    SwarmMetrics {
        tick: swarm.tick(),
        population: agents.len(),
        flow_count: swarm.flow_count(),
        field_strength: swarm.field_strength(),
        best_k: swarm.best_k(),
        mean_coherence,
        mean_need: mean_of(agents, Organism::need),
        mean_fatigue: mean_of(agents, Organism::fatigue),
        mean_shield: mean_of(agents, Organism::shield),
        mean_k,
        k_spread,
        mean_neighbor_distance: mean_neighbor_distance(agents),
        total_breaches: agents.iter().map(|a| a.estimator().breaches()).sum(),
        breaching_now: agents.iter().filter(|a| a.breached()).count(),
    }
}

fn mean_of(agents: &[Organism], f: impl Fn(&Organism) -> f64) -> f64 {
    if agents.is_empty() {
        return 0.0;
    }
    agents.iter().map(f).sum::<f64>() / agents.len() as f64
}

fn mean_neighbor_distance(agents: &[Organism]) -> f64 {
    if agents.len() < 2 {
        return 0.0;
    }
    let total: f64 = agents
        .iter()
        .enumerate()
        .map(|(i, a)| {
            agents
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, b)| a.position().toroidal_distance(&b.position()))
                .fold(f64::INFINITY, f64::min)
        })
        .sum();
    total / agents.len() as f64
}
