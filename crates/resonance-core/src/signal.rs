//! World signal generator: the shared external stimulus.
//!
//! Every agent receives the same vector each tick: a small fixed set of
//! sinusoids with distinct frequencies and phase offsets. The generator is a
//! pure function of the tick index.

use crate::error::{ResonanceError, Result};
use crate::types::Tick;
use serde::{Deserialize, Serialize};

/// One sinusoidal component: `sin(frequency * tick + offset)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Harmonic {
    pub frequency: f64,
    #[serde(default)]
    pub offset: f64,
}

impl Harmonic {
    pub fn new(frequency: f64, offset: f64) -> Self {
        Self { frequency, offset }
    }

    #[inline]
    pub fn value_at(&self, tick: Tick) -> f64 {
        (tick as f64 * self.frequency + self.offset).sin()
    }
}

/// A fixed-length bank of harmonics sampled once per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSignal {
    harmonics: Vec<Harmonic>,
}

impl WorldSignal {
    /// Build a generator. An empty bank would hand agents an empty signal,
    /// so it is rejected up front.
    pub fn new(harmonics: Vec<Harmonic>) -> Result<Self> {
        if harmonics.is_empty() {
            return Err(ResonanceError::invalid_config(
                "harmonics",
                "[]",
                "the world signal needs at least one harmonic",
            ));
        }
        if let Some(h) = harmonics
            .iter()
            .find(|h| !h.frequency.is_finite() || !h.offset.is_finite())
        {
            return Err(ResonanceError::invalid_config(
                "harmonics",
                format!("{:?}", h),
                "frequency and offset must be finite",
            ));
        }
        Ok(Self { harmonics })
    }

    /// The three-tone stimulus: `sin(0.07i)`, `sin(0.11i + 1.3)`, `sin(0.03i + 2.1)`.
    pub fn standard() -> Self {
        Self {
            harmonics: standard_harmonics(),
        }
    }

    /// Sample every harmonic at `tick`.
    pub fn sample(&self, tick: Tick) -> Vec<f64> {
        self.harmonics.iter().map(|h| h.value_at(tick)).collect()
    }

    pub fn harmonics(&self) -> &[Harmonic] {
        &self.harmonics
    }

    /// Number of samples produced per tick.
    pub fn width(&self) -> usize {
        self.harmonics.len()
    }
}

impl Default for WorldSignal {
    fn default() -> Self {
        Self::standard()
    }
}

/// The harmonic bank behind [`WorldSignal::standard`].
pub fn standard_harmonics() -> Vec<Harmonic> {
    vec![
        Harmonic::new(0.07, 0.0),
        Harmonic::new(0.11, 1.3),
        Harmonic::new(0.03, 2.1),
    ]
}
