//! Resonance Agents Prelude — convenient imports for common usage.
//!
//! ```rust
//! use resonance_agents::prelude::*;
//! ```

// Re-export agent types
pub use crate::config::{Capabilities, OrganismConfig, Variant};
pub use crate::organism::{Organism, INITIAL_K_RANGE};

// Re-export from core
pub use resonance_core::prelude::*;
