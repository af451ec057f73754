//! Declarative generator descriptions.
//!
//! These types describe *what* to build; `wavegen-synth` turns them into live
//! generators. Validation here applies the same construction rules the synth
//! constructors enforce, so a description can be checked without building it.

use serde::{Deserialize, Serialize};

use crate::error::SpecResult;
use crate::validation::{
    validate_buffer_size, validate_open_unit_interval, validate_positive, CommonValidationError,
};

/// Default square wave duty cycle.
pub const DEFAULT_SPLIT: f64 = 0.5;
/// Default brown noise step scale.
pub const DEFAULT_BROWN_FAC: f64 = 0.5;
/// Default Karplus-Strong wavetable length, tuned for a plucked string.
pub const DEFAULT_BUFFER_SIZE: usize = 256;
/// Harmonic numbers used when none are given: the first sixteen.
pub const DEFAULT_HARMONICS: [u32; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];

/// Basic periodic waveform types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Sine wave.
    #[default]
    Sine,
    /// Square wave with a 50% duty cycle.
    Square,
    /// Sawtooth wave.
    Sawtooth,
    /// Triangle wave.
    Triangle,
}

/// A single generator description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum GeneratorParams {
    /// Sine wave.
    Sine {
        /// Frequency in Hz.
        frequency: f64,
    },
    /// Square wave.
    Square {
        /// Frequency in Hz.
        frequency: f64,
        /// Fraction of each period spent at +1, in (0, 1).
        #[serde(default = "default_split")]
        split: f64,
    },
    /// Sawtooth wave.
    Sawtooth {
        /// Frequency in Hz.
        frequency: f64,
    },
    /// Triangle wave.
    Triangle {
        /// Frequency in Hz.
        frequency: f64,
    },
    /// Unit impulse at frame 0.
    Impulse {},
    /// Uniform white noise.
    Noise {},
    /// Clamped random walk.
    BrownNoise {
        /// Step size scale.
        #[serde(default = "default_fac")]
        fac: f64,
    },
    /// Karplus-Strong plucked string.
    Digitar {
        /// Frequency in Hz.
        frequency: f64,
        /// Wavetable length; smaller tables decay faster.
        #[serde(default = "default_buffer_size")]
        buffer_size: usize,
        /// Signal sampled to seed the wavetable. White noise when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        wave_source: Option<Box<GeneratorParams>>,
    },
}

fn default_split() -> f64 {
    DEFAULT_SPLIT
}

fn default_fac() -> f64 {
    DEFAULT_BROWN_FAC
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

impl GeneratorParams {
    /// Sine wave at `frequency`.
    pub fn sine(frequency: f64) -> Self {
        Self::Sine { frequency }
    }

    /// Square wave at `frequency` with the default duty cycle.
    pub fn square(frequency: f64) -> Self {
        Self::Square {
            frequency,
            split: DEFAULT_SPLIT,
        }
    }

    /// Karplus-Strong generator with the default wavetable and noise seed.
    pub fn digitar(frequency: f64) -> Self {
        Self::Digitar {
            frequency,
            buffer_size: DEFAULT_BUFFER_SIZE,
            wave_source: None,
        }
    }

    /// Periodic generator of the given waveform.
    pub fn periodic(waveform: Waveform, frequency: f64) -> Self {
        match waveform {
            Waveform::Sine => Self::Sine { frequency },
            Waveform::Square => Self::square(frequency),
            Waveform::Sawtooth => Self::Sawtooth { frequency },
            Waveform::Triangle => Self::Triangle { frequency },
        }
    }

    /// Short snake_case name of the variant, matching the serde tag.
    pub fn kind(&self) -> &'static str {
        match self {
            GeneratorParams::Sine { .. } => "sine",
            GeneratorParams::Square { .. } => "square",
            GeneratorParams::Sawtooth { .. } => "sawtooth",
            GeneratorParams::Triangle { .. } => "triangle",
            GeneratorParams::Impulse {} => "impulse",
            GeneratorParams::Noise {} => "noise",
            GeneratorParams::BrownNoise { .. } => "brown_noise",
            GeneratorParams::Digitar { .. } => "digitar",
        }
    }

    /// Frequency in Hz; `0.0` for the aperiodic generators.
    pub fn frequency(&self) -> f64 {
        match self {
            GeneratorParams::Sine { frequency }
            | GeneratorParams::Square { frequency, .. }
            | GeneratorParams::Sawtooth { frequency }
            | GeneratorParams::Triangle { frequency }
            | GeneratorParams::Digitar { frequency, .. } => *frequency,
            GeneratorParams::Impulse {}
            | GeneratorParams::Noise {}
            | GeneratorParams::BrownNoise { .. } => 0.0,
        }
    }

    /// Checks the construction rules, returning the first violation.
    pub fn validate(&self) -> Result<(), CommonValidationError> {
        match self {
            GeneratorParams::Sine { frequency }
            | GeneratorParams::Sawtooth { frequency }
            | GeneratorParams::Triangle { frequency } => validate_positive("frequency", *frequency),
            GeneratorParams::Square { frequency, split } => {
                validate_positive("frequency", *frequency)?;
                validate_open_unit_interval("split", *split)
            }
            GeneratorParams::Impulse {} | GeneratorParams::Noise {} => Ok(()),
            GeneratorParams::BrownNoise { fac } => validate_positive("fac", *fac),
            GeneratorParams::Digitar {
                frequency,
                buffer_size,
                wave_source,
            } => {
                validate_positive("frequency", *frequency)?;
                validate_buffer_size("buffer_size", *buffer_size)?;
                match wave_source {
                    Some(source) => source.validate(),
                    None => Ok(()),
                }
            }
        }
    }

    /// Parses a description from JSON and validates it.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        let params: GeneratorParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Serializes the description to JSON.
    pub fn to_json(&self) -> SpecResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A harmonic series: one generator per harmonic number, each at
/// `base_frequency * n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarmonicsParams {
    /// Frequency of the first harmonic in Hz.
    pub base_frequency: f64,
    /// Harmonic numbers, in output order.
    #[serde(default = "default_harmonics")]
    pub harmonics: Vec<u32>,
    /// Waveform of every partial.
    #[serde(default)]
    pub waveform: Waveform,
}

fn default_harmonics() -> Vec<u32> {
    DEFAULT_HARMONICS.to_vec()
}

impl HarmonicsParams {
    /// The first sixteen sine harmonics of `base_frequency`.
    pub fn new(base_frequency: f64) -> Self {
        Self {
            base_frequency,
            harmonics: default_harmonics(),
            waveform: Waveform::Sine,
        }
    }

    /// Replaces the harmonic numbers.
    pub fn with_harmonics(mut self, harmonics: impl Into<Vec<u32>>) -> Self {
        self.harmonics = harmonics.into();
        self
    }

    /// Replaces the partial waveform.
    pub fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    /// Describes each partial, in order.
    pub fn partials(&self) -> Vec<GeneratorParams> {
        self.harmonics
            .iter()
            .map(|&n| GeneratorParams::periodic(self.waveform, self.base_frequency * n as f64))
            .collect()
    }

    /// Checks the base frequency and that every harmonic number is positive.
    pub fn validate(&self) -> Result<(), CommonValidationError> {
        validate_positive("base_frequency", self.base_frequency)?;
        if let Some(index) = self.harmonics.iter().position(|&n| n == 0) {
            return Err(CommonValidationError::new(format!(
                "harmonics[{}] must be a positive integer, got 0",
                index
            )));
        }
        Ok(())
    }

    /// Parses a description from JSON and validates it.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        let params: HarmonicsParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }
}
