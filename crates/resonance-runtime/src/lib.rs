//! # Resonance Runtime
//!
//! Swarm management, field aggregation, and the host simulation loop.
//!
//! The runtime is the collective: it owns a fixed population of organisms,
//! turns their recorded coherence into a shared field each tick, and feeds
//! that field back to every organism on the next tick.

pub mod builder;
pub mod export;
pub mod metrics;
pub mod prelude;
pub mod simulation;
pub mod swarm;
