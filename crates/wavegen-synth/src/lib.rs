//! Wavegen Synthesis Backend
//!
//! This crate implements infinite, frame-indexed waveform generators:
//!
//! - **Oscillators** - Sine, square (with duty cycle), sawtooth and triangle
//! - **Noise** - White and brown noise
//! - **Karplus-Strong** - Plucked strings from a recirculating wavetable
//! - **Harmonics** - One generator per partial of a harmonic series
//!
//! # Overview
//!
//! Every generator implements [`Signal`]: ask it for the amplitude at frame N
//! and it answers with a value nominally in `[-1, 1]`. Periodic generators are
//! pure functions of the frame index and also implement [`PureSignal`]. Noise
//! and the Karplus-Strong string are stateful; see their docs for which access
//! patterns they support.
//!
//! # Determinism
//!
//! Generators built through [`build_generator`] are deterministic: the same
//! description and [`SynthConfig`](wavegen_spec::SynthConfig) always render the
//! same samples. The crate uses PCG32 for all random number generation, with
//! seeds derived via BLAKE3 hashing. Constructors that take no seed draw one
//! from entropy instead.
//!
//! # Example
//!
//! ```
//! use wavegen_spec::{GeneratorParams, SynthConfig};
//! use wavegen_synth::{build_generator, Signal};
//!
//! let config = SynthConfig::new(44100.0, 7);
//! let mut pluck = build_generator(&GeneratorParams::digitar(110.0), &config)?;
//! let block = pluck.render(0, 512);
//! assert_eq!(block.len(), 512);
//! # Ok::<(), wavegen_synth::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`build_generator()`] - Builds a generator from its declarative description
//! - [`signal`] - The signal contract and small helper signals
//! - [`synthesis`] - Generator implementations
//! - [`rng`] - Deterministic RNG with seed derivation

pub mod error;
pub mod generate;
pub mod rng;
pub mod signal;
pub mod synthesis;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use generate::{build_bank, build_generator, build_harmonics, Generator};
pub use signal::{Frame, PureSignal, Sample, Signal, SignalDuration};
