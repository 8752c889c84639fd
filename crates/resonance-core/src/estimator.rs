//! Coherence Estimator — a self-calibrating anomaly detector.
//!
//! Each agent owns one estimator. Every tick it turns the world signal into a
//! coherence value and compares it against two exponential baselines:
//!
//! - a **fast** baseline that follows recent coherence closely, and
//! - a **slow** baseline that is nearly fixed over a run.
//!
//! The deviation from the fast baseline feeds an adaptive threshold that is
//! smoothed in the log domain. A deviation more than three times the
//! threshold is a *breach*: a statistical outlier relative to the typical
//! deviation this estimator has seen so far. Because the threshold itself
//! adapts, the detector tolerates regime shifts in the input signal.

use crate::coherence::{circular_coherence, ema, phase};
use crate::error::{check_signal, Result};
use serde::{Deserialize, Serialize};

/// Guard against `ln(0)` in the log-domain threshold update.
pub const EPSILON: f64 = 1e-9;

/// Retention weight of the fast baseline.
pub const FAST_RETENTION: f64 = 0.9;
/// Retention weight of the slow baseline.
pub const SLOW_RETENTION: f64 = 0.995;
/// Weight the threshold keeps on its own past log-value.
pub const THRESHOLD_MEMORY: f64 = 0.99;
/// Weight of the current deviation in the threshold update.
pub const THRESHOLD_DRIFT: f64 = 0.01;
/// Multiple of the threshold a deviation must exceed to count as a breach.
pub const BREACH_FACTOR: f64 = 3.0;

const INITIAL_BASELINE: f64 = 0.5;
const INITIAL_THRESHOLD: f64 = 0.01;

/// Result of feeding one world signal through an estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoherenceReading {
    /// Circular coherence of the mapped phases, in `[0, 1]`.
    pub coherence: f64,
    /// `|coherence - fast_baseline|`, measured before the baseline moved.
    pub deviation: f64,
    /// Whether the deviation exceeded `BREACH_FACTOR * threshold`.
    pub breach: bool,
}

/// Per-agent coherence tracker with dual-speed baselines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoherenceEstimator {
    k: f64,
    fast_baseline: f64,
    slow_baseline: f64,
    threshold: f64,
    last_coherence: f64,
    breaches: u64,
    last_breach: bool,
}

impl CoherenceEstimator {
    /// Create an estimator with resonance multiplier `k`.
    pub fn new(k: f64) -> Self {
        Self {
            k,
            fast_baseline: INITIAL_BASELINE,
            slow_baseline: INITIAL_BASELINE,
            threshold: INITIAL_THRESHOLD,
            last_coherence: INITIAL_BASELINE,
            breaches: 0,
            last_breach: false,
        }
    }

    /// Feed one world signal through the estimator.
    ///
    /// Fails with an invalid-input error on an empty signal or a NaN or
    /// infinite sample; in that case no field of the estimator is modified.
    pub fn update(&mut self, samples: &[f64]) -> Result<CoherenceReading> {
        check_signal(samples)?;
        let phases: Vec<f64> = samples.iter().map(|&v| phase(v, self.k)).collect();
        let coherence = circular_coherence(&phases)?;

        let deviation = (coherence - self.fast_baseline).abs();

        self.threshold = (THRESHOLD_MEMORY * (self.threshold + EPSILON).ln()
            + THRESHOLD_DRIFT * (deviation + EPSILON).ln())
        .exp();

        self.fast_baseline = ema(self.fast_baseline, coherence, FAST_RETENTION);
        self.slow_baseline += (1.0 - SLOW_RETENTION) * (coherence - self.slow_baseline);

        let breach = deviation > self.threshold * BREACH_FACTOR;
        if breach {
            self.breaches += 1;
        }
        self.last_breach = breach;
        self.last_coherence = coherence;

        Ok(CoherenceReading {
            coherence,
            deviation,
            breach,
        })
    }

    /// Current resonance multiplier.
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Replace the resonance multiplier. Clamping is the owner's job.
    pub fn set_k(&mut self, k: f64) {
        self.k = k;
    }

    pub fn fast_baseline(&self) -> f64 {
        self.fast_baseline
    }

    pub fn slow_baseline(&self) -> f64 {
        self.slow_baseline
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Most recent coherence (0.5 before the first update).
    pub fn last_coherence(&self) -> f64 {
        self.last_coherence
    }

    /// Total breaches observed over the estimator's lifetime.
    pub fn breaches(&self) -> u64 {
        self.breaches
    }

    pub fn last_breach(&self) -> bool {
        self.last_breach
    }
}
