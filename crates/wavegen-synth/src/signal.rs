//! The signal contract: produce an amplitude for frame N.
//!
//! [`Signal::amplitude`] takes `&mut self` because some generators advance
//! internal state when queried (brown noise walks, the Karplus-Strong filter
//! ticks). Generators whose output depends only on the frame index also
//! implement [`PureSignal`], whose [`PureSignal::sample`] borrows immutably and
//! can be shared across threads.

use wavegen_spec::SampleRate;

use crate::error::{AudioError, AudioResult};

/// Discrete time index, one sample period apart, starting at 0.
pub type Frame = u64;

/// How long a signal lasts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalDuration {
    /// Lasts this many seconds.
    Finite(f64),
    /// Defined for every non-negative frame.
    Infinite,
}

impl SignalDuration {
    /// Number of frames covered at `sample_rate`, or `None` when infinite.
    pub fn frames(self, sample_rate: SampleRate) -> Option<u64> {
        match self {
            SignalDuration::Finite(seconds) => Some((seconds * sample_rate.hz()).ceil() as u64),
            SignalDuration::Infinite => None,
        }
    }

    /// True for [`SignalDuration::Infinite`].
    pub fn is_infinite(self) -> bool {
        matches!(self, SignalDuration::Infinite)
    }
}

/// Something that produces an amplitude for every frame in its duration.
pub trait Signal {
    /// How long the signal lasts.
    fn duration(&self) -> SignalDuration {
        SignalDuration::Infinite
    }

    /// Amplitude at `frame`, nominally in `[-1, 1]`.
    ///
    /// Stateful generators may advance on every call; see the generator's
    /// own docs for which access patterns it supports.
    fn amplitude(&mut self, frame: Frame) -> f64;

    /// Renders `len` consecutive frames starting at `start`.
    fn render(&mut self, start: Frame, len: usize) -> Vec<f64> {
        (0..len as u64).map(|i| self.amplitude(start + i)).collect()
    }
}

/// A signal whose amplitude depends only on the frame index.
pub trait PureSignal: Signal {
    /// Amplitude at `frame`, with no side effects.
    fn sample(&self, frame: Frame) -> f64;
}

/// A signal with a nominal frequency.
pub trait Sample: Signal {
    /// Frequency in Hz; `0.0` for aperiodic generators.
    fn frequency(&self) -> f64;

    /// Sample rate the generator was built for.
    fn sample_rate(&self) -> SampleRate;

    /// Frames per cycle, or `None` when the frequency is 0.
    fn period(&self) -> Option<f64> {
        self.sample_rate().period_of(self.frequency())
    }
}

impl<S: Signal + ?Sized> Signal for Box<S> {
    fn duration(&self) -> SignalDuration {
        (**self).duration()
    }

    fn amplitude(&mut self, frame: Frame) -> f64 {
        (**self).amplitude(frame)
    }
}

/// Converts a signed frame index into a [`Frame`] valid for `signal`.
///
/// Rejects negative indices and, for finite signals, indices at or past the
/// last frame.
pub fn checked_frame<S: Signal + ?Sized>(
    signal: &S,
    frame: i64,
    sample_rate: SampleRate,
) -> AudioResult<Frame> {
    let index = u64::try_from(frame).map_err(|_| AudioError::NegativeFrame { frame })?;
    if let Some(length) = signal.duration().frames(sample_rate) {
        if index >= length {
            return Err(AudioError::FrameOutOfRange {
                frame: index,
                length,
            });
        }
    }
    Ok(index)
}

/// Implements [`Signal`] for an infinite [`PureSignal`] by delegating to `sample`.
macro_rules! impl_infinite_pure_signal {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::signal::Signal for $ty {
                fn amplitude(&mut self, frame: $crate::signal::Frame) -> f64 {
                    $crate::signal::PureSignal::sample(self, frame)
                }
            }
        )+
    };
}
pub(crate) use impl_infinite_pure_signal;

/// A closure wrapped as a pure signal.
///
/// Handy as a deterministic wavetable seed.
#[derive(Clone)]
pub struct FnSignal<F> {
    f: F,
    duration: SignalDuration,
}

/// Wraps `f` as an infinite pure signal.
///
/// # Example
/// ```
/// use wavegen_synth::signal::{from_fn, PureSignal};
///
/// let ramp = from_fn(|frame| frame as f64 / 100.0);
/// assert_eq!(ramp.sample(50), 0.5);
/// ```
pub fn from_fn<F>(f: F) -> FnSignal<F>
where
    F: Fn(Frame) -> f64,
{
    FnSignal {
        f,
        duration: SignalDuration::Infinite,
    }
}

impl<F> FnSignal<F>
where
    F: Fn(Frame) -> f64,
{
    /// Limits the signal to `seconds`.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = SignalDuration::Finite(seconds);
        self
    }
}

impl<F> std::fmt::Debug for FnSignal<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSignal")
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

impl<F> Signal for FnSignal<F>
where
    F: Fn(Frame) -> f64,
{
    fn duration(&self) -> SignalDuration {
        self.duration
    }

    fn amplitude(&mut self, frame: Frame) -> f64 {
        (self.f)(frame)
    }
}

impl<F> PureSignal for FnSignal<F>
where
    F: Fn(Frame) -> f64,
{
    fn sample(&self, frame: Frame) -> f64 {
        (self.f)(frame)
    }
}

/// Unit impulse: `1.0` at frame 0, silence afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Impulse;

impl PureSignal for Impulse {
    fn sample(&self, frame: Frame) -> f64 {
        if frame == 0 {
            1.0
        } else {
            0.0
        }
    }
}

impl_infinite_pure_signal!(Impulse);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rate() -> SampleRate {
        SampleRate::new(1000.0).unwrap()
    }

    #[test]
    fn test_render_is_sequential() {
        let mut ramp = from_fn(|frame| frame as f64);
        assert_eq!(ramp.render(3, 4), vec![3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_impulse() {
        let mut impulse = Impulse;
        assert_eq!(impulse.render(0, 4), vec![1.0, 0.0, 0.0, 0.0]);
        assert!(impulse.duration().is_infinite());
    }

    #[test]
    fn test_finite_duration_frames() {
        assert_eq!(SignalDuration::Finite(0.5).frames(rate()), Some(500));
        assert_eq!(SignalDuration::Infinite.frames(rate()), None);
    }

    #[test]
    fn test_checked_frame_rejects_negative() {
        let err = checked_frame(&Impulse, -1, rate()).unwrap_err();
        assert!(matches!(err, AudioError::NegativeFrame { frame: -1 }));
    }

    #[test]
    fn test_checked_frame_infinite_accepts_large() {
        assert_eq!(checked_frame(&Impulse, i64::MAX, rate()).unwrap(), i64::MAX as u64);
    }

    #[test]
    fn test_checked_frame_finite_bounds() {
        let short = from_fn(|_| 0.0).with_duration(0.5);
        assert_eq!(checked_frame(&short, 499, rate()).unwrap(), 499);

        let err = checked_frame(&short, 500, rate()).unwrap_err();
        assert!(matches!(
            err,
            AudioError::FrameOutOfRange {
                frame: 500,
                length: 500
            }
        ));
    }

    #[test]
    fn test_boxed_signal_delegates() {
        let mut boxed: Box<dyn Signal> = Box::new(from_fn(|frame| -(frame as f64)).with_duration(1.0));
        assert_eq!(boxed.amplitude(2), -2.0);
        assert_eq!(boxed.duration(), SignalDuration::Finite(1.0));
    }
}
