//! Organism configuration: capability flags, tuning parameters, presets.
//!
//! Two behavioral profiles share one implementation. `Variant::Sovereign`
//! enables fatigue, shield and internal memory; `Variant::Minimal` disables
//! all three and searches frequency space with random jitter instead.

use resonance_core::error::{check_unit_interval, ResonanceError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Optional internal channels of an organism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Track a smoothed breach indicator.
    pub fatigue: bool,
    /// Track a slow copy of coherence that damps pulse and search amplitude.
    pub shield: bool,
    /// Track smoothed (coherence, need, field) and use it to steer hunger search.
    pub memory: bool,
}

impl Capabilities {
    pub fn full() -> Self {
        Self {
            fatigue: true,
            shield: true,
            memory: true,
        }
    }

    pub fn minimal() -> Self {
        Self {
            fatigue: false,
            shield: false,
            memory: false,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::full()
    }
}

/// Named organism presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Fatigue, shield and memory enabled.
    Sovereign,
    /// No internal channels; random hunger search.
    Minimal,
}

impl Variant {
    pub fn config(self) -> OrganismConfig {
        match self {
            Variant::Sovereign => OrganismConfig::sovereign(),
            Variant::Minimal => OrganismConfig::minimal(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Sovereign => write!(f, "sovereign"),
            Variant::Minimal => write!(f, "minimal"),
        }
    }
}

impl FromStr for Variant {
    type Err = ResonanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sovereign" | "full" => Ok(Variant::Sovereign),
            "minimal" => Ok(Variant::Minimal),
            other => Err(ResonanceError::invalid_config(
                "variant",
                other,
                "expected `sovereign` or `minimal`",
            )),
        }
    }
}

/// Tunable parameters of an organism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganismConfig {
    /// Which internal channels are active.
    pub capabilities: Capabilities,
    /// Retention weight when pulling `K` toward the swarm's best `K`.
    pub social_rate: f64,
    /// Half-width of the per-tick diversity noise on `K` (0 disables it).
    pub diversity: f64,
    /// Half-width of the random hunger search used without memory.
    pub hunger_jitter: f64,
    /// Distance moved per tick.
    pub step_size: f64,
    /// Number of samples kept in the history ring buffer.
    pub history_capacity: usize,
}

impl OrganismConfig {
    /// The full-featured profile.
    pub fn sovereign() -> Self {
        Self {
            capabilities: Capabilities::full(),
            social_rate: 0.92,
            diversity: 0.001,
            hunger_jitter: 0.01,
            step_size: 0.002,
            history_capacity: 150,
        }
    }

    /// The stripped-down profile.
    pub fn minimal() -> Self {
        Self {
            capabilities: Capabilities::minimal(),
            social_rate: 0.9,
            diversity: 0.002,
            hunger_jitter: 0.01,
            step_size: 0.003,
            history_capacity: 100,
        }
    }

    /// Disable the per-tick diversity noise.
    pub fn without_diversity(mut self) -> Self {
        self.diversity = 0.0;
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Check every parameter, failing on the first invalid one.
    pub fn validate(&self) -> Result<()> {
        check_unit_interval("social_rate", self.social_rate)?;
        check_non_negative("diversity", self.diversity)?;
        check_non_negative("hunger_jitter", self.hunger_jitter)?;
        check_non_negative("step_size", self.step_size)?;
        if self.history_capacity == 0 {
            return Err(ResonanceError::invalid_config(
                "history_capacity",
                "0",
                "history must hold at least one sample",
            ));
        }
        Ok(())
    }
}

impl Default for OrganismConfig {
    fn default() -> Self {
        Self::sovereign()
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ResonanceError::invalid_config(
            field,
            value.to_string(),
            "must be a finite, non-negative number",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert!(OrganismConfig::sovereign().validate().is_ok());
        assert!(OrganismConfig::minimal().validate().is_ok());
    }

    #[test]
    fn variant_parses_case_insensitively() {
        assert_eq!("Sovereign".parse::<Variant>().unwrap(), Variant::Sovereign);
        assert_eq!("full".parse::<Variant>().unwrap(), Variant::Sovereign);
        assert_eq!("MINIMAL".parse::<Variant>().unwrap(), Variant::Minimal);
        assert!("chaotic".parse::<Variant>().is_err());
    }

    #[test]
    fn variant_round_trips_through_display() {
        for v in [Variant::Sovereign, Variant::Minimal] {
            assert_eq!(v.to_string().parse::<Variant>().unwrap(), v);
        }
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut c = OrganismConfig::sovereign();
        c.social_rate = 1.2;
        assert!(c.validate().is_err());

        let c = OrganismConfig::sovereign().with_history_capacity(0);
        assert!(c.validate().is_err());

        let mut c = OrganismConfig::minimal();
        c.step_size = -0.1;
        assert!(c.validate().is_err());

        let mut c = OrganismConfig::minimal();
        c.diversity = f64::INFINITY;
        assert!(c.validate().is_err());
    }

    #[test]
    fn without_diversity_zeroes_noise() {
        let c = OrganismConfig::sovereign().without_diversity();
        assert_eq!(c.diversity, 0.0);
        assert!(c.validate().is_ok());
    }
}
