//! # Resonance Core
//!
//! Core types and numerics for resonance swarms.
//!
//! A resonance swarm is a population of oscillatory agents. Each agent maps
//! a shared world signal onto the unit circle through its own resonance
//! multiplier `K` and measures how aligned the resulting phases are. This
//! crate provides the pieces every agent and swarm is built from:
//!
//! - **coherence** - phase mapping, circular coherence, exponential smoothing
//! - **estimator** - per-agent coherence tracker with fast/slow baselines and
//!   an adaptive breach threshold
//! - **history** - fixed-capacity FIFO ring buffer
//! - **signal** - the deterministic world signal generator
//! - **random** - the seedable random source threaded through updates
//! - **agent** - the `ResonantAgent` trait a swarm drives
//!
//! ## Quick Start
//!
//! ```rust
//! use resonance_core::prelude::*;
//!
//! let mut estimator = CoherenceEstimator::new(1.618);
//! let world = WorldSignal::standard();
//!
//! let reading = estimator.update(&world.sample(0)).unwrap();
//! assert!((0.0..=1.0).contains(&reading.coherence));
//! ```

pub mod agent;
pub mod coherence;
pub mod error;
pub mod estimator;
pub mod history;
pub mod prelude;
pub mod random;
pub mod signal;
pub mod types;
