//! Resonance Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use resonance_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    AgentId, Position, Tick,
    HistorySample, FieldState,
    AgentSnapshot, SwarmSnapshot,
    K_MIN, K_MAX, FLOW_THRESHOLD,
};

// Re-export coherence numerics
pub use crate::coherence::{circular_coherence, ema, phase};
pub use crate::estimator::{CoherenceEstimator, CoherenceReading};

// Re-export supporting structures
pub use crate::history::History;
pub use crate::signal::{Harmonic, WorldSignal};
pub use crate::random::{seeded, RandomSource, SwarmRng};

// Re-export the ResonantAgent trait
pub use crate::agent::ResonantAgent;

// Re-export error types
pub use crate::error::{ConfigError, InputError, ResonanceError, Result};
