//! Generator integration tests: plucked strings, periodic waves, noise, and
//! generators built from JSON descriptions.

use proptest::prelude::*;
use wavegen_spec::{GeneratorParams, HarmonicsParams, SampleRate, SynthConfig};
use wavegen_synth::signal::Impulse;
use wavegen_synth::synthesis::{
    sine_harmonics, BrownNoise, Digitar, Noise, SawtoothWave, SineWave, SquareWave, TriangleWave,
};
use wavegen_synth::{build_generator, build_harmonics, Generator, PureSignal, Sample, Signal};

const EPSILON: f64 = 1e-9;

// ============================================================================
// Karplus-Strong Tests
// ============================================================================

fn impulse_pluck() -> Digitar {
    Digitar::builder(110.0)
        .buffer_size(256)
        .wave_source(Impulse)
        .build(SampleRate::DEFAULT)
        .unwrap()
}

#[test]
fn test_digitar_impulse_energy_decays_each_revolution() {
    let mut pluck = impulse_pluck();
    assert_eq!(pluck.energy(), 1.0);

    let mut previous = pluck.energy();
    for revolution in 1..=40u64 {
        pluck.seek(revolution * 256);
        let energy = pluck.energy();
        assert!(
            energy < previous,
            "energy rose from {} to {} on revolution {}",
            previous,
            energy,
            revolution
        );
        previous = energy;
    }
}

#[test]
fn test_digitar_impulse_output_decays() {
    let mut pluck = impulse_pluck();
    let samples = pluck.render(0, 44100);

    let peak = |range: std::ops::Range<usize>| {
        samples[range]
            .iter()
            .fold(0.0f64, |acc, s| acc.max(s.abs()))
    };
    assert!(peak(0..4410) > peak(39690..44100));
    assert!(samples.iter().all(|s| s.is_finite()));
}

#[test]
fn test_digitar_backward_seek_replays() {
    let mut pluck = impulse_pluck();
    let forward = pluck.render(0, 2000);

    assert_eq!(pluck.amplitude(100), forward[100]);
    assert_eq!(pluck.cur_frame(), 100);
    assert_eq!(pluck.amplitude(1999), forward[1999]);
}

#[test]
fn test_digitar_reports_pitch() {
    let pluck = impulse_pluck();
    assert_eq!(pluck.frequency(), 110.0);
    let period = pluck.period().unwrap();
    assert!((period - 44100.0 / 110.0).abs() < EPSILON);
}

// ============================================================================
// Periodic Wave Tests
// ============================================================================

proptest! {
    /// 441 Hz at 44.1 kHz repeats every 100 frames.
    #[test]
    fn prop_waves_repeat_each_period(frame in 0u64..1_000_000, cycles in 1u64..1000) {
        let rate = SampleRate::DEFAULT;
        let later = frame + cycles * 100;

        let sine = SineWave::new(441.0, rate).unwrap();
        let square = SquareWave::new(441.0, rate).unwrap();
        let saw = SawtoothWave::new(441.0, rate).unwrap();
        let tri = TriangleWave::new(441.0, rate).unwrap();

        prop_assert!((sine.sample(frame) - sine.sample(later)).abs() < 1e-6);
        prop_assert_eq!(square.sample(frame), square.sample(later));
        prop_assert!((saw.sample(frame) - saw.sample(later)).abs() < 1e-6);
        prop_assert!((tri.sample(frame) - tri.sample(later)).abs() < 1e-6);
    }

    #[test]
    fn prop_waves_stay_in_range(frequency in 1.0f64..20_000.0, frame in any::<u32>()) {
        let rate = SampleRate::DEFAULT;
        let frame = u64::from(frame);
        let values = [
            SineWave::new(frequency, rate).unwrap().sample(frame),
            SquareWave::new(frequency, rate).unwrap().sample(frame),
            SawtoothWave::new(frequency, rate).unwrap().sample(frame),
            TriangleWave::new(frequency, rate).unwrap().sample(frame),
        ];
        for value in values {
            prop_assert!((-1.0 - EPSILON..=1.0 + EPSILON).contains(&value), "{}", value);
        }
    }

    #[test]
    fn prop_square_only_emits_unit_values(split in 0.01f64..0.99, frame in any::<u32>()) {
        let square = SquareWave::with_split(440.0, split, SampleRate::DEFAULT).unwrap();
        let value = square.sample(u64::from(frame));
        prop_assert!(value == 1.0 || value == -1.0);
    }
}

#[test]
fn test_pure_waves_ignore_query_order() {
    let mut tri = TriangleWave::new(440.0, SampleRate::DEFAULT).unwrap();
    let forward = tri.render(0, 500);
    for frame in (0..500u64).rev() {
        assert_eq!(tri.amplitude(frame), forward[frame as usize]);
    }
}

// ============================================================================
// Noise Tests
// ============================================================================

#[test]
fn test_noise_streams_are_seeded() {
    let a = Noise::new(1).render(0, 64);
    let b = Noise::new(1).render(0, 64);
    let c = Noise::new(2).render(0, 64);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_brown_noise_walk_stays_bounded() {
    let mut brown = BrownNoise::with_fac(0.9, 5).unwrap();
    let samples = brown.render(0, 100_000);
    assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
}

// ============================================================================
// Harmonics Tests
// ============================================================================

#[test]
fn test_sine_harmonics_cover_sixteen_partials() {
    let partials = sine_harmonics(100.0, SampleRate::DEFAULT).unwrap();
    assert_eq!(partials.len(), 16);
    assert_eq!(partials[0].frequency(), 100.0);
    assert_eq!(partials[15].frequency(), 1600.0);
}

#[test]
fn test_harmonics_from_params() {
    let params = HarmonicsParams::new(100.0).with_harmonics(vec![1, 2, 3]);
    let partials = build_harmonics(&params, &SynthConfig::default()).unwrap();
    let freqs: Vec<f64> = partials.iter().map(Generator::frequency).collect();
    assert_eq!(freqs, vec![100.0, 200.0, 300.0]);
}

#[test]
fn test_harmonics_reject_zero() {
    let params = HarmonicsParams::new(100.0).with_harmonics(vec![1, 0]);
    assert!(build_harmonics(&params, &SynthConfig::default()).is_err());
}

// ============================================================================
// JSON Description Tests
// ============================================================================

#[test]
fn test_build_from_json() {
    let params = GeneratorParams::from_json(
        r#"{"type": "square", "frequency": 441.0, "split": 0.25}"#,
    )
    .unwrap();
    let config = SynthConfig::from_json(r#"{"sample_rate": 44100.0, "seed": 3}"#).unwrap();

    let generator = build_generator(&params, &config).unwrap();
    let square = generator.as_pure().unwrap();
    let high = (0..100).filter(|&f| square.sample(f) > 0.0).count();
    assert_eq!(high, 25);
}

#[test]
fn test_build_nested_digitar_from_json() {
    let json = serde_json::json!({
        "type": "digitar",
        "frequency": 220.0,
        "buffer_size": 128,
        "wave_source": { "type": "brown_noise", "fac": 0.2 }
    });
    let params: GeneratorParams = serde_json::from_value(json).unwrap();
    let config = SynthConfig::new(48000.0, 11);

    let a = build_generator(&params, &config).unwrap().render(0, 4096);
    let b = build_generator(&params, &config).unwrap().render(0, 4096);
    assert_eq!(a, b);
    assert!(a.iter().all(|s| s.is_finite()));
}

#[test]
fn test_build_rejects_bad_json_values() {
    let json = r#"{"type": "digitar", "frequency": 110.0, "buffer_size": 1}"#;
    assert!(GeneratorParams::from_json(json).is_err());

    // Skipping validation at parse time still fails at build time.
    let params: GeneratorParams = serde_json::from_str(json).unwrap();
    let err = build_generator(&params, &SynthConfig::default()).unwrap_err();
    assert!(err.is_configuration());
}
