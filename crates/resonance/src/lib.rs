//! # Resonance
//!
//! Self-organizing swarms of oscillatory agents coupled through an emergent
//! coherence field.
//!
//! Every organism projects a shared multi-channel world signal onto phases
//! through its own resonance multiplier `K` and measures how well those
//! phases line up. Organisms whose last coherence is high enough form a flow
//! set; the swarm averages their `K` into a shared best `K` and feeds it back
//! to every organism on the next tick. Hungry organisms drift toward it,
//! searching organisms wander, and over time the population converges.
//!
//! ## Quick Start
//!
//! ```rust
//! use resonance::prelude::*;
//!
//! let mut sim = SimulationBuilder::new()
//!     .population(12)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let reports = sim.run(200).unwrap();
//! let last = reports.last().unwrap();
//! println!(
//!     "tick {}: {} in flow, field {:.2}, best K {:.3}",
//!     last.tick, last.flow_count, last.field.field_strength, last.field.best_k
//! );
//!
//! let metrics = resonance::runtime::metrics::compute(sim.swarm());
//! assert_eq!(metrics.population, 12);
//! ```
//!
//! ## Architecture
//!
//! - [`resonance_core`] - Coherence numerics, the estimator, world signal, shared types
//! - [`resonance_agents`] - The organism and its capability presets
//! - [`resonance_runtime`] - Swarm, simulation loop, metrics, trace export
//!
//! ## Variants
//!
//! | Variant | Fatigue | Shield | Memory | History |
//! |---------|---------|--------|--------|---------|
//! | Sovereign | yes | yes | yes | 150 |
//! | Minimal | no | no | no | 100 |
//!
//! ## Custom Agents
//!
//! The swarm is generic over [`ResonantAgent`](resonance_core::agent::ResonantAgent),
//! so alternative organisms can be driven by the same field aggregation:
//!
//! ```rust,ignore
//! let swarm = Swarm::from_agents(my_agents, DEFAULT_BEST_K)?;
//! ```

// Re-export all subcrates
pub use resonance_core as core;
pub use resonance_agents as agents;
pub use resonance_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use resonance::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use resonance_core::types::{
        AgentId, Position, Tick,
        HistorySample, FieldState,
        AgentSnapshot, SwarmSnapshot,
        K_MIN, K_MAX, FLOW_THRESHOLD,
    };
    pub use resonance_core::agent::ResonantAgent;
    pub use resonance_core::estimator::{CoherenceEstimator, CoherenceReading};
    pub use resonance_core::signal::{Harmonic, WorldSignal};
    pub use resonance_core::random::{seeded, RandomSource, SwarmRng};

    // Error types
    pub use resonance_core::error::{ResonanceError, Result};

    // Agents
    pub use resonance_agents::config::{Capabilities, OrganismConfig, Variant};
    pub use resonance_agents::organism::Organism;

    // Runtime
    pub use resonance_runtime::swarm::{StepReport, Swarm, SwarmConfig, DEFAULT_BEST_K};
    pub use resonance_runtime::simulation::Simulation;
    pub use resonance_runtime::builder::SimulationBuilder;
    pub use resonance_runtime::metrics::SwarmMetrics;
    pub use resonance_runtime::export::{to_json_lines, TraceRecorder};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
