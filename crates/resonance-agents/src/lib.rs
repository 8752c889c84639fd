//! # Resonance Agents
//!
//! Agent implementations driven by a resonance swarm.
//!
//! - **Organism** - a coherence-feeding agent with optional fatigue, shield
//!   and memory channels, configured through [`config::OrganismConfig`]
//!   and the [`config::Variant`] presets.

pub mod config;
pub mod organism;
pub mod prelude;
