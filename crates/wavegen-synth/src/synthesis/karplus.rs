//! Karplus-Strong synthesis for plucked string sounds.
//!
//! A circular wavetable seeded from another signal (white noise by default) is
//! run through a one-pole lowpass feedback filter, one slot per tick. Repeated
//! passes smooth away the inharmonic content and the tone decays. Output is
//! read from a separate fractional phase that moves through the table at a
//! rate set by the desired frequency, so the table size controls the decay
//! speed while the phase increment controls the pitch. Small tables decay
//! fast enough that the noise never resolves into a tone, which sounds more
//! like a drum.
//!
//! # Access pattern
//!
//! The filter only runs forward. Querying frame `F` ticks the filter up to
//! `F`; querying an earlier frame reseeds the table from the wave source and
//! replays from frame 0. Ascending queries cost O(1) amortized per call.
//! With a random wave source, a backward seek produces a different pluck.

use wavegen_spec::{SampleRate, DEFAULT_BUFFER_SIZE};

use crate::error::{AudioError, AudioResult};
use crate::signal::{Frame, Sample, Signal};
use crate::synthesis::noise::Noise;

/// Weight of the current slot in the feedback filter.
const FEEDBACK_CURRENT: f64 = 0.3;
/// Weight of the slot being overwritten.
const FEEDBACK_NEXT: f64 = 0.7;

/// Boxed signal used to seed a [`Digitar`] wavetable.
pub type WaveSource = Box<dyn Signal + Send>;

/// Karplus-Strong plucked string generator.
///
/// # Example
/// ```
/// use wavegen_spec::SampleRate;
/// use wavegen_synth::signal::Signal;
/// use wavegen_synth::synthesis::karplus::Digitar;
/// use wavegen_synth::synthesis::noise::Noise;
///
/// let mut pluck = Digitar::builder(110.0)
///     .buffer_size(256)
///     .wave_source(Noise::new(42))
///     .build(SampleRate::DEFAULT)
///     .unwrap();
///
/// let block = pluck.render(0, 512);
/// assert_eq!(block.len(), 512);
/// ```
pub struct Digitar {
    frequency: f64,
    sample_rate: SampleRate,
    wave_source: WaveSource,
    wavetable: Vec<f64>,
    cur_frame: Frame,
    phase: f64,
    phase_increment: f64,
}

/// Builder for [`Digitar`].
pub struct DigitarBuilder {
    frequency: f64,
    buffer_size: usize,
    wave_source: Option<WaveSource>,
}

impl DigitarBuilder {
    /// Sets the wavetable length. Smaller tables decay faster.
    pub fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Sets the signal sampled to seed the wavetable.
    pub fn wave_source(mut self, source: impl Signal + Send + 'static) -> Self {
        self.wave_source = Some(Box::new(source));
        self
    }

    /// Sets an already boxed wave source.
    pub fn boxed_wave_source(mut self, source: WaveSource) -> Self {
        self.wave_source = Some(source);
        self
    }

    /// Validates the parameters and seeds the wavetable.
    ///
    /// Without an explicit wave source, the generator gets its own
    /// entropy-seeded white noise.
    pub fn build(self, sample_rate: SampleRate) -> AudioResult<Digitar> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(AudioError::InvalidFrequency {
                freq: self.frequency,
            });
        }
        if self.buffer_size < 2 {
            return Err(AudioError::InvalidBufferSize {
                size: self.buffer_size,
            });
        }

        let wave_source = self
            .wave_source
            .unwrap_or_else(|| Box::new(Noise::from_entropy()));
        let base_frequency = sample_rate.hz() / self.buffer_size as f64;

        let mut digitar = Digitar {
            frequency: self.frequency,
            sample_rate,
            wave_source,
            wavetable: vec![0.0; self.buffer_size],
            cur_frame: 0,
            phase: 0.0,
            phase_increment: self.frequency / base_frequency,
        };
        digitar.reset();

        tracing::debug!(
            frequency = digitar.frequency,
            buffer_size = digitar.buffer_size(),
            phase_increment = digitar.phase_increment,
            "built digitar"
        );
        Ok(digitar)
    }
}

impl Digitar {
    /// Starts building a generator at `frequency` Hz.
    pub fn builder(frequency: f64) -> DigitarBuilder {
        DigitarBuilder {
            frequency,
            buffer_size: DEFAULT_BUFFER_SIZE,
            wave_source: None,
        }
    }

    /// Plucked string at `frequency` Hz with the default table and a fresh
    /// white noise seed.
    pub fn new(frequency: f64, sample_rate: SampleRate) -> AudioResult<Self> {
        Self::builder(frequency).build(sample_rate)
    }

    /// Reseeds the wavetable from the wave source and rewinds to frame 0.
    pub fn reset(&mut self) {
        for (i, slot) in self.wavetable.iter_mut().enumerate() {
            *slot = self.wave_source.amplitude(i as Frame);
        }
        self.cur_frame = 0;
        self.phase = 0.0;
    }

    /// Advances the filter by exactly one step.
    pub fn tick(&mut self) {
        let len = self.wavetable.len();
        let cur = (self.cur_frame % len as u64) as usize;
        let next = (cur + 1) % len;

        self.wavetable[next] =
            self.wavetable[cur] * FEEDBACK_CURRENT + self.wavetable[next] * FEEDBACK_NEXT;
        self.cur_frame += 1;
        self.phase = (self.phase + self.phase_increment) % len as f64;
    }

    /// Moves the filter to `frame`.
    ///
    /// Seeking backwards reseeds and replays from frame 0.
    pub fn seek(&mut self, frame: Frame) {
        if frame < self.cur_frame {
            tracing::debug!(
                from = self.cur_frame,
                to = frame,
                "backward seek, reseeding wavetable"
            );
            self.reset();
        }

        let distance = frame - self.cur_frame;
        if distance > self.wavetable.len() as u64 {
            tracing::trace!(distance, "long forward seek");
        }
        for _ in 0..distance {
            self.tick();
        }
    }

    /// Interpolated wavetable value at the current phase.
    fn read(&self) -> f64 {
        let len = self.wavetable.len();
        let index = self.phase.floor();
        let frac = self.phase - index;
        let i = index as usize % len;

        let s1 = self.wavetable[i];
        let s2 = self.wavetable[(i + 1) % len];
        frac * s2 + (1.0 - frac) * s1
    }

    /// Highest filter tick reached so far.
    pub fn cur_frame(&self) -> Frame {
        self.cur_frame
    }

    /// Fractional read position, in `[0, buffer_size)`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Phase advance per tick.
    pub fn phase_increment(&self) -> f64 {
        self.phase_increment
    }

    /// Wavetable length.
    pub fn buffer_size(&self) -> usize {
        self.wavetable.len()
    }

    /// Current wavetable contents.
    pub fn wavetable(&self) -> &[f64] {
        &self.wavetable
    }

    /// Sum of squared wavetable entries.
    pub fn energy(&self) -> f64 {
        self.wavetable.iter().map(|s| s * s).sum()
    }
}

impl std::fmt::Debug for Digitar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Digitar")
            .field("frequency", &self.frequency)
            .field("buffer_size", &self.wavetable.len())
            .field("cur_frame", &self.cur_frame)
            .field("phase", &self.phase)
            .field("phase_increment", &self.phase_increment)
            .finish_non_exhaustive()
    }
}

impl Signal for Digitar {
    /// Seeks to `frame` and reads the interpolated output. Not clamped; the
    /// filter can briefly exceed `[-1, 1]` for unusual seeds.
    fn amplitude(&mut self, frame: Frame) -> f64 {
        self.seek(frame);
        self.read()
    }
}

impl Sample for Digitar {
    fn frequency(&self) -> f64 {
        self.frequency
    }

    fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }
}
