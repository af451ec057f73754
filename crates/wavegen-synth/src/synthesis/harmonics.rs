//! Harmonic series helper.
//!
//! Builds one generator per harmonic number, each at `base * n`, in the order
//! the numbers were given. Summing a series of sines gives a band-limited
//! alternative to the aliasing square/saw/triangle oscillators.

use wavegen_spec::{SampleRate, DEFAULT_HARMONICS};

use crate::error::{AudioError, AudioResult};
use crate::synthesis::oscillators::SineWave;

/// Builds `constructor(base_freq * n)` for each `n` in `ns`, preserving order.
///
/// Harmonic numbers must be positive; the first constructor error is returned.
///
/// # Example
/// ```
/// use wavegen_spec::SampleRate;
/// use wavegen_synth::signal::Sample;
/// use wavegen_synth::synthesis::harmonics::harmonics;
/// use wavegen_synth::synthesis::oscillators::TriangleWave;
///
/// let rate = SampleRate::DEFAULT;
/// let partials = harmonics(100.0, &[1, 3, 5], |f| TriangleWave::new(f, rate)).unwrap();
/// let freqs: Vec<f64> = partials.iter().map(|p| p.frequency()).collect();
/// assert_eq!(freqs, vec![100.0, 300.0, 500.0]);
/// ```
pub fn harmonics<S, F>(base_freq: f64, ns: &[u32], mut constructor: F) -> AudioResult<Vec<S>>
where
    F: FnMut(f64) -> AudioResult<S>,
{
    ns.iter()
        .map(|&n| {
            if n == 0 {
                return Err(AudioError::invalid_param(
                    "harmonics",
                    "harmonic numbers must be positive",
                ));
            }
            constructor(base_freq * n as f64)
        })
        .collect()
}

/// The first sixteen sine harmonics of `base_freq`.
pub fn sine_harmonics(base_freq: f64, sample_rate: SampleRate) -> AudioResult<Vec<SineWave>> {
    harmonics(base_freq, &DEFAULT_HARMONICS, |f| SineWave::new(f, sample_rate))
}
