//! Builds live generators from declarative descriptions.
//!
//! Every random generator gets a seed derived from the config seed and its
//! position in the description, so the same description and config always
//! render the same audio.

use wavegen_spec::{GeneratorParams, HarmonicsParams, SampleRate, SynthConfig};

use crate::error::AudioResult;
use crate::rng::{derive_component_seed, derive_index_seed};
use crate::signal::{Frame, Impulse, PureSignal, Sample, Signal, SignalDuration};
use crate::synthesis::{
    harmonics, BrownNoise, Digitar, Noise, SawtoothWave, SineWave, SquareWave, TriangleWave,
};

/// Any built-in generator.
#[derive(Debug)]
pub enum Generator {
    /// Sine wave.
    Sine(SineWave),
    /// Square wave.
    Square(SquareWave),
    /// Sawtooth wave.
    Sawtooth(SawtoothWave),
    /// Triangle wave.
    Triangle(TriangleWave),
    /// Unit impulse.
    Impulse(Impulse),
    /// White noise.
    Noise(Noise),
    /// Brown noise.
    BrownNoise(BrownNoise),
    /// Karplus-Strong plucked string.
    Digitar(Digitar),
}

impl Generator {
    /// Frequency in Hz; `0.0` for noise and the impulse.
    pub fn frequency(&self) -> f64 {
        match self {
            Generator::Sine(g) => g.frequency(),
            Generator::Square(g) => g.frequency(),
            Generator::Sawtooth(g) => g.frequency(),
            Generator::Triangle(g) => g.frequency(),
            Generator::Digitar(g) => g.frequency(),
            Generator::Impulse(_) | Generator::Noise(_) | Generator::BrownNoise(_) => 0.0,
        }
    }

    /// Frames per cycle, or `None` for aperiodic generators.
    pub fn period(&self) -> Option<f64> {
        match self {
            Generator::Sine(g) => g.period(),
            Generator::Square(g) => g.period(),
            Generator::Sawtooth(g) => g.period(),
            Generator::Triangle(g) => g.period(),
            Generator::Digitar(g) => g.period(),
            Generator::Impulse(_) | Generator::Noise(_) | Generator::BrownNoise(_) => None,
        }
    }

    /// The generator as a side-effect-free signal, if it is one.
    ///
    /// `None` for noise and the Karplus-Strong generator, which mutate on
    /// every query and must be driven by a single caller.
    pub fn as_pure(&self) -> Option<&dyn PureSignal> {
        match self {
            Generator::Sine(g) => Some(g as &dyn PureSignal),
            Generator::Square(g) => Some(g as &dyn PureSignal),
            Generator::Sawtooth(g) => Some(g as &dyn PureSignal),
            Generator::Triangle(g) => Some(g as &dyn PureSignal),
            Generator::Impulse(g) => Some(g as &dyn PureSignal),
            Generator::Noise(_) | Generator::BrownNoise(_) | Generator::Digitar(_) => None,
        }
    }

    /// True when queries have no side effects.
    pub fn is_pure(&self) -> bool {
        self.as_pure().is_some()
    }
}

impl Signal for Generator {
    fn duration(&self) -> SignalDuration {
        SignalDuration::Infinite
    }

    fn amplitude(&mut self, frame: Frame) -> f64 {
        match self {
            Generator::Sine(g) => g.amplitude(frame),
            Generator::Square(g) => g.amplitude(frame),
            Generator::Sawtooth(g) => g.amplitude(frame),
            Generator::Triangle(g) => g.amplitude(frame),
            Generator::Impulse(g) => g.amplitude(frame),
            Generator::Noise(g) => g.amplitude(frame),
            Generator::BrownNoise(g) => g.amplitude(frame),
            Generator::Digitar(g) => g.amplitude(frame),
        }
    }
}

/// Validates `params` and builds the generator it describes.
///
/// # Arguments
/// * `params` - Generator description
/// * `config` - Sample rate and base seed
pub fn build_generator(params: &GeneratorParams, config: &SynthConfig) -> AudioResult<Generator> {
    params.validate()?;
    let sample_rate = config.sample_rate()?;
    build_at(params, sample_rate, config.seed, params.kind())
}

/// Builds a bank of generators, giving each its own seed stream.
pub fn build_bank(params: &[GeneratorParams], config: &SynthConfig) -> AudioResult<Vec<Generator>> {
    let sample_rate = config.sample_rate()?;
    params
        .iter()
        .enumerate()
        .map(|(index, p)| {
            p.validate()?;
            let seed = derive_index_seed(config.seed, index as u32);
            build_at(p, sample_rate, seed, p.kind())
        })
        .collect()
}

/// Builds every partial of a harmonic series, in order.
pub fn build_harmonics(params: &HarmonicsParams, config: &SynthConfig) -> AudioResult<Vec<Generator>> {
    params.validate()?;
    let sample_rate = config.sample_rate()?;
    let partial = GeneratorParams::periodic(params.waveform, 1.0);

    harmonics(params.base_frequency, &params.harmonics, |frequency| {
        let partial = with_frequency(&partial, frequency);
        build_at(&partial, sample_rate, config.seed, partial.kind())
    })
}

fn with_frequency(params: &GeneratorParams, frequency: f64) -> GeneratorParams {
    match params {
        GeneratorParams::Square { split, .. } => GeneratorParams::Square {
            frequency,
            split: *split,
        },
        GeneratorParams::Sawtooth { .. } => GeneratorParams::Sawtooth { frequency },
        GeneratorParams::Triangle { .. } => GeneratorParams::Triangle { frequency },
        _ => GeneratorParams::Sine { frequency },
    }
}

/// Builds an already validated description. `path` keys the seed derivation.
fn build_at(
    params: &GeneratorParams,
    sample_rate: SampleRate,
    seed: u32,
    path: &str,
) -> AudioResult<Generator> {
    let generator = match params {
        GeneratorParams::Sine { frequency } => {
            Generator::Sine(SineWave::new(*frequency, sample_rate)?)
        }
        GeneratorParams::Square { frequency, split } => {
            Generator::Square(SquareWave::with_split(*frequency, *split, sample_rate)?)
        }
        GeneratorParams::Sawtooth { frequency } => {
            Generator::Sawtooth(SawtoothWave::new(*frequency, sample_rate)?)
        }
        GeneratorParams::Triangle { frequency } => {
            Generator::Triangle(TriangleWave::new(*frequency, sample_rate)?)
        }
        GeneratorParams::Impulse {} => Generator::Impulse(Impulse),
        GeneratorParams::Noise {} => Generator::Noise(Noise::new(derive_component_seed(seed, path))),
        GeneratorParams::BrownNoise { fac } => Generator::BrownNoise(BrownNoise::with_fac(
            *fac,
            derive_component_seed(seed, path),
        )?),
        GeneratorParams::Digitar {
            frequency,
            buffer_size,
            wave_source,
        } => {
            let source_path = format!("{}/wave_source", path);
            let source = match wave_source {
                Some(source) => build_at(source, sample_rate, seed, &source_path)?,
                None => Generator::Noise(Noise::new(derive_component_seed(seed, &source_path))),
            };
            Generator::Digitar(
                Digitar::builder(*frequency)
                    .buffer_size(*buffer_size)
                    .wave_source(source)
                    .build(sample_rate)?,
            )
        }
    };

    tracing::debug!(kind = params.kind(), path, "built generator");
    Ok(generator)
}
