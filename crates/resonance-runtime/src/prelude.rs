//! Resonance Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use resonance_runtime::prelude::*;
//! ```

// Re-export swarm
pub use crate::swarm::{StepReport, Swarm, SwarmConfig, DEFAULT_BEST_K};

// Re-export simulation and builder
pub use crate::builder::SimulationBuilder;
pub use crate::simulation::Simulation;

// Re-export metrics and export
pub use crate::metrics::SwarmMetrics;
pub use crate::export::{to_json_lines, TraceRecorder};

// Re-export from agents
pub use resonance_agents::prelude::*;
