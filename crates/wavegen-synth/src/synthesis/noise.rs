//! Noise generators.
//!
//! Both generators draw from their own PCG32 stream. Neither is a function of
//! the frame index: every [`Signal::amplitude`] call consumes randomness,
//! whatever frame it asks for. Noise has no pitch, so neither implements
//! [`Sample`](crate::signal::Sample).

use rand_pcg::Pcg32;
use wavegen_spec::validation::validate_positive;
use wavegen_spec::DEFAULT_BROWN_FAC;

use crate::error::AudioResult;
use crate::rng::{create_rng, entropy_seed, uniform_bipolar};
use crate::signal::{Frame, Signal};

/// White noise: every call is an independent uniform draw from `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct Noise {
    rng: Pcg32,
}

impl Noise {
    /// Creates white noise from a fixed seed.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: create_rng(seed),
        }
    }

    /// Creates white noise seeded from entropy; output differs run to run.
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }
}

impl Signal for Noise {
    fn amplitude(&mut self, _frame: Frame) -> f64 {
        uniform_bipolar(&mut self.rng)
    }
}

/// Brown noise: a random walk clamped to `[-1, 1]`.
///
/// Each call adds a uniform step scaled by `fac` to the previous output. The
/// walk advances on every call regardless of the requested frame, so querying
/// the same frame twice yields two different values and out-of-order queries
/// do not replay earlier output. Only sequential, increasing access gives a
/// meaningful signal.
#[derive(Debug, Clone)]
pub struct BrownNoise {
    prev: f64,
    fac: f64,
    rng: Pcg32,
}

impl BrownNoise {
    /// Creates brown noise with the default step scale.
    pub fn new(seed: u32) -> Self {
        Self {
            prev: 0.0,
            fac: DEFAULT_BROWN_FAC,
            rng: create_rng(seed),
        }
    }

    /// Creates brown noise whose steps are scaled by `fac` (must be positive).
    pub fn with_fac(fac: f64, seed: u32) -> AudioResult<Self> {
        validate_positive("fac", fac)?;
        Ok(Self {
            fac,
            ..Self::new(seed)
        })
    }

    /// Creates brown noise with the default step scale, seeded from entropy.
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    /// Step scale.
    pub fn fac(&self) -> f64 {
        self.fac
    }

    /// Last value produced, `0.0` before the first call.
    pub fn prev(&self) -> f64 {
        self.prev
    }
}

impl Signal for BrownNoise {
    fn amplitude(&mut self, _frame: Frame) -> f64 {
        self.prev = (self.prev + uniform_bipolar(&mut self.rng) * self.fac).clamp(-1.0, 1.0);
        self.prev
    }
}
