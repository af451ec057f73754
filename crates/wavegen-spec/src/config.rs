//! Synthesis context shared by every generator in a pipeline.
//!
//! The sample rate is injected into generators at construction. Changing it
//! for a pipeline means rebuilding its generators; stateful generators bake
//! it into their phase increments.

use serde::{Deserialize, Serialize};

use crate::error::SpecResult;
use crate::validation::{validate_positive, CommonValidationError};

/// Sample rate in frames per second.
///
/// Always positive and finite once constructed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SampleRate(f64);

impl SampleRate {
    /// CD-quality rate used when nothing else is configured.
    pub const DEFAULT: SampleRate = SampleRate(44_100.0);

    /// Creates a validated sample rate.
    pub fn new(hz: f64) -> Result<Self, CommonValidationError> {
        validate_positive("sample_rate", hz)?;
        Ok(Self(hz))
    }

    /// Frames per second.
    pub fn hz(self) -> f64 {
        self.0
    }

    /// Number of frames (possibly fractional) in one cycle of `frequency`.
    ///
    /// Returns `None` for a zero frequency, whose period is undefined.
    pub fn period_of(self, frequency: f64) -> Option<f64> {
        if frequency == 0.0 {
            None
        } else {
            Some(self.0 / frequency)
        }
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for SampleRate {
    type Error = CommonValidationError;

    fn try_from(hz: f64) -> Result<Self, Self::Error> {
        Self::new(hz)
    }
}

/// Synthesis context: sample rate and base seed for all randomness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthConfig {
    /// Frames per second.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: f64,
    /// Base seed; per-generator seeds are derived from it.
    #[serde(default)]
    pub seed: u32,
}

fn default_sample_rate() -> f64 {
    SampleRate::DEFAULT.hz()
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            seed: 0,
        }
    }
}

impl SynthConfig {
    /// Creates a config with the given sample rate and seed.
    pub fn new(sample_rate: f64, seed: u32) -> Self {
        Self { sample_rate, seed }
    }

    /// Parses a config from JSON and validates it.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        let config: SynthConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config to pretty-printed JSON.
    pub fn to_json(&self) -> SpecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that the sample rate is usable.
    pub fn validate(&self) -> Result<(), CommonValidationError> {
        self.sample_rate().map(|_| ())
    }

    /// The validated sample rate.
    pub fn sample_rate(&self) -> Result<SampleRate, CommonValidationError> {
        SampleRate::new(self.sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sample_rate_rejects_non_positive() {
        assert!(SampleRate::new(0.0).is_err());
        assert!(SampleRate::new(-44100.0).is_err());
        assert!(SampleRate::new(f64::NAN).is_err());
        assert_eq!(SampleRate::new(48000.0).unwrap().hz(), 48000.0);
    }

    #[test]
    fn test_period_of() {
        let rate = SampleRate::new(44100.0).unwrap();
        assert_eq!(rate.period_of(441.0), Some(100.0));
        assert_eq!(rate.period_of(0.0), None);
    }

    #[test]
    fn test_config_defaults_from_empty_json() {
        let config = SynthConfig::from_json("{}").unwrap();
        assert_eq!(config, SynthConfig::default());
        assert_eq!(config.sample_rate, 44100.0);
        assert_eq!(config.seed, 0);
    }

    #[test]
    fn test_config_round_trip() {
        let config = SynthConfig::new(22050.0, 7);
        let json = config.to_json().unwrap();
        assert_eq!(SynthConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_config_rejects_unknown_fields_and_bad_rate() {
        assert!(SynthConfig::from_json(r#"{"rate": 44100}"#).is_err());
        assert!(SynthConfig::from_json(r#"{"sample_rate": 0}"#).is_err());
    }
}
