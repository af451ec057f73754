//! Stateless periodic generators (sine, square, saw, triangle).
//!
//! Each wave is a pure function of `frame mod period`, so arbitrarily large
//! frame indices are valid and any frame can be queried in any order. None of
//! these are band-limited; they alias at high frequencies. Build a harmonic
//! series of sines for a band-limited timbre instead.

use std::f64::consts::TAU;

use wavegen_spec::validation::validate_open_unit_interval;
use wavegen_spec::{SampleRate, DEFAULT_SPLIT};

use crate::error::{AudioError, AudioResult};
use crate::signal::{impl_infinite_pure_signal, Frame, PureSignal, Sample};

/// Frequency and the period it implies at a given sample rate.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Periodic {
    frequency: f64,
    sample_rate: SampleRate,
    period: f64,
}

impl Periodic {
    fn new(frequency: f64, sample_rate: SampleRate) -> AudioResult<Self> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(AudioError::InvalidFrequency { freq: frequency });
        }
        Ok(Self {
            frequency,
            sample_rate,
            period: sample_rate.hz() / frequency,
        })
    }

    /// Position of `frame` within its cycle, in `[0, period)`.
    #[inline]
    fn position(&self, frame: Frame) -> f64 {
        frame as f64 % self.period
    }
}

macro_rules! impl_periodic_sample {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Sample for $ty {
                fn frequency(&self) -> f64 {
                    self.periodic.frequency
                }

                fn sample_rate(&self) -> SampleRate {
                    self.periodic.sample_rate
                }

                fn period(&self) -> Option<f64> {
                    Some(self.periodic.period)
                }
            }
        )+
    };
}

/// Sine wave: `sin(2π · frame / period)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineWave {
    periodic: Periodic,
}

impl SineWave {
    /// Creates a sine wave at `frequency` Hz.
    pub fn new(frequency: f64, sample_rate: SampleRate) -> AudioResult<Self> {
        Ok(Self {
            periodic: Periodic::new(frequency, sample_rate)?,
        })
    }
}

impl PureSignal for SineWave {
    fn sample(&self, frame: Frame) -> f64 {
        (self.periodic.position(frame) * TAU / self.periodic.period).sin()
    }
}

/// Square wave: `+1` for the first `split` of each period, `-1` for the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareWave {
    periodic: Periodic,
    split: f64,
}

impl SquareWave {
    /// Creates a square wave with a 50% duty cycle.
    pub fn new(frequency: f64, sample_rate: SampleRate) -> AudioResult<Self> {
        Self::with_split(frequency, DEFAULT_SPLIT, sample_rate)
    }

    /// Creates a pulse wave whose high portion covers `split` of each period.
    ///
    /// `split` must lie strictly inside (0, 1).
    pub fn with_split(frequency: f64, split: f64, sample_rate: SampleRate) -> AudioResult<Self> {
        validate_open_unit_interval("split", split)?;
        Ok(Self {
            periodic: Periodic::new(frequency, sample_rate)?,
            split,
        })
    }

    /// Duty cycle.
    pub fn split(&self) -> f64 {
        self.split
    }
}

impl PureSignal for SquareWave {
    fn sample(&self, frame: Frame) -> f64 {
        if self.periodic.position(frame) < self.periodic.period * self.split {
            1.0
        } else {
            -1.0
        }
    }
}

/// Sawtooth wave: a ramp from -1 towards +1 each period, dropping back at the wrap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SawtoothWave {
    periodic: Periodic,
}

impl SawtoothWave {
    /// Creates a sawtooth wave at `frequency` Hz.
    pub fn new(frequency: f64, sample_rate: SampleRate) -> AudioResult<Self> {
        Ok(Self {
            periodic: Periodic::new(frequency, sample_rate)?,
        })
    }
}

impl PureSignal for SawtoothWave {
    fn sample(&self, frame: Frame) -> f64 {
        self.periodic.position(frame) / self.periodic.period * 2.0 - 1.0
    }
}

/// Triangle wave: rises 0 → 1 over the first quarter, falls 1 → -1 over the
/// middle half, and rises -1 → 0 over the last quarter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleWave {
    periodic: Periodic,
}

impl TriangleWave {
    /// Creates a triangle wave at `frequency` Hz.
    pub fn new(frequency: f64, sample_rate: SampleRate) -> AudioResult<Self> {
        Ok(Self {
            periodic: Periodic::new(frequency, sample_rate)?,
        })
    }
}

impl PureSignal for TriangleWave {
    fn sample(&self, frame: Frame) -> f64 {
        let half = self.periodic.period / 2.0;
        let quarter = half / 2.0;
        let mut pos = self.periodic.position(frame);

        if pos < quarter {
            return pos / quarter;
        }
        pos -= quarter;
        if pos < half {
            return 1.0 - 2.0 * pos / half;
        }
        pos -= half;
        pos / quarter - 1.0
    }
}

impl_infinite_pure_signal!(SineWave, SquareWave, SawtoothWave, TriangleWave);
impl_periodic_sample!(SineWave, SquareWave, SawtoothWave, TriangleWave);
