//! Wavegen generator descriptions
//!
//! This crate provides the declarative side of wavegen: serde-friendly
//! descriptions of every generator, the synthesis context they are built in,
//! and the validation rules shared with the synth backend.
//!
//! # Example
//!
//! ```
//! use wavegen_spec::{GeneratorParams, SynthConfig};
//!
//! let config = SynthConfig::from_json(r#"{"sample_rate": 48000, "seed": 42}"#).unwrap();
//! let pluck = GeneratorParams::from_json(r#"{"type": "digitar", "frequency": 110}"#).unwrap();
//!
//! assert_eq!(config.seed, 42);
//! assert_eq!(pluck.kind(), "digitar");
//! ```
//!
//! # Modules
//!
//! - [`config`]: Sample rate and seed
//! - [`generator`]: Generator and harmonic series descriptions
//! - [`validation`]: Shared parameter checks
//! - [`error`]: Parse and validation errors

pub mod config;
pub mod error;
pub mod generator;
pub mod validation;

pub use config::{SampleRate, SynthConfig};
pub use error::{SpecError, SpecResult};
pub use generator::{
    GeneratorParams, HarmonicsParams, Waveform, DEFAULT_BROWN_FAC, DEFAULT_BUFFER_SIZE,
    DEFAULT_HARMONICS, DEFAULT_SPLIT,
};
pub use validation::CommonValidationError;
