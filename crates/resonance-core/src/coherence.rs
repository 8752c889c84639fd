//! Phase mapping and circular coherence.
//!
//! An external sample `v` is remapped onto the unit circle by an agent's
//! resonance multiplier `K`: `phase = (v * K) mod 1`. Coherence is the
//! length of the mean resultant of those phases as unit vectors, so a set of
//! identical phases scores 1.0 and an evenly spread set scores 0.0.

use crate::error::{check_signal, Result};
use crate::types::wrap_unit;
use std::f64::consts::TAU;

/// Exponential moving average: `alpha * old + (1 - alpha) * new`.
///
/// `alpha` is the retention weight, so values close to 1.0 adapt slowly.
#[inline]
pub fn ema(old: f64, new: f64, alpha: f64) -> f64 {
    alpha * old + (1.0 - alpha) * new
}

/// Map a sample onto `[0, 1)` using the resonance multiplier `k`.
#[inline]
pub fn phase(value: f64, k: f64) -> f64 {
    wrap_unit(value * k)
}

/// Magnitude of the mean resultant vector of `phases` on the unit circle.
///
/// Returns a value in `[0, 1]`. Fails on an empty phase set, where the
/// mean is undefined, and on NaN or infinite phases.
pub fn circular_coherence(phases: &[f64]) -> Result<f64> {
    check_signal(phases)?;

    let n = phases.len() as f64;
    let (sum_cos, sum_sin) = phases.iter().fold((0.0, 0.0), |(c, s), p| {
        let angle = TAU * p;
        (c + angle.cos(), s + angle.sin())
    });

    let mean_cos = sum_cos / n;
    let mean_sin = sum_sin / n;
    // Rounding can push a perfectly aligned set a hair past 1.0.
    Ok((mean_cos * mean_cos + mean_sin * mean_sin).sqrt().min(1.0))
}
