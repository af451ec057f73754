//! Generator implementations.
//!
//! - `oscillators` - Sine, square, sawtooth and triangle waves
//! - `noise` - White noise and brown (random walk) noise
//! - `karplus` - Karplus-Strong plucked string (`Digitar`)
//! - `harmonics` - Harmonic series helper

pub mod harmonics;
pub mod karplus;
pub mod noise;
pub mod oscillators;

pub use harmonics::{harmonics, sine_harmonics};
pub use karplus::{Digitar, DigitarBuilder, WaveSource};
pub use noise::{BrownNoise, Noise};
pub use oscillators::{SawtoothWave, SineWave, SquareWave, TriangleWave};
