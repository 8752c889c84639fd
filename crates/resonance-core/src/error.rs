//! Error types for resonance operations.
//!
//! Misconfiguration and empty input surface as structured errors instead of
//! panics, so a host can fail fast before the first tick runs.

use thiserror::Error;

/// Result type for resonance operations.
pub type Result<T> = std::result::Result<T, ResonanceError>;

/// Errors that can occur while building or stepping a swarm.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResonanceError {
    /// Input handed to an estimator, agent, or swarm was unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Construction parameters were rejected.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for ResonanceError {
    fn from(e: std::io::Error) -> Self {
        ResonanceError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ResonanceError {
    fn from(e: serde_json::Error) -> Self {
        ResonanceError::Serialization(e.to_string())
    }
}

/// Input-related errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Coherence is undefined over zero samples.
    #[error("world signal is empty; coherence needs at least one sample")]
    EmptySignal,

    /// A sample was NaN or infinite and has no phase on the circle.
    #[error("world signal sample {index} is not finite: {value}")]
    NonFiniteSample { index: usize, value: f64 },
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Invalid value.
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    /// Out of range.
    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

// Convenience constructors
impl ResonanceError {
    pub fn empty_signal() -> Self {
        ResonanceError::InvalidInput(InputError::EmptySignal)
    }

    pub fn non_finite_sample(index: usize, value: f64) -> Self {
        ResonanceError::InvalidInput(InputError::NonFiniteSample { index, value })
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ResonanceError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        ResonanceError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }

    /// Whether this error came from unusable input rather than configuration.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ResonanceError::InvalidInput(_))
    }
}

/// Reject a world signal that is empty or holds a non-finite sample.
pub fn check_signal(samples: &[f64]) -> Result<()> {
    if samples.is_empty() {
        return Err(ResonanceError::empty_signal());
    }
    match samples.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ResonanceError::non_finite_sample(index, samples[index])),
        None => Ok(()),
    }
}

/// Reject rates/fractions outside the closed unit interval.
pub fn check_unit_interval(field: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ResonanceError::out_of_range(field, 0.0, 1.0, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_signal_is_invalid_input() {
        let err = ResonanceError::empty_signal();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("world signal is empty"));
    }

    #[test]
    fn signal_check_names_the_bad_sample() {
        assert!(check_signal(&[0.1, -2.0]).is_ok());
        assert_eq!(check_signal(&[]), Err(ResonanceError::empty_signal()));

        let err = check_signal(&[0.1, f64::INFINITY, f64::NAN]).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "Invalid input: world signal sample 1 is not finite: inf"
        );
        assert!(check_signal(&[f64::NAN]).is_err());
    }

    #[test]
    fn out_of_range_message_names_field() {
        let err = ResonanceError::out_of_range("social_rate", 0.0, 1.0, 1.5);
        assert!(!err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "Config error: social_rate out of range: 1.5 (must be 0-1)"
        );
    }

    #[test]
    fn unit_interval_check() {
        assert!(check_unit_interval("rate", 0.0).is_ok());
        assert!(check_unit_interval("rate", 1.0).is_ok());
        assert!(check_unit_interval("rate", -0.1).is_err());
        assert!(check_unit_interval("rate", f64::NAN).is_err());
    }
}
