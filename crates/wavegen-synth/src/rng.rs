//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the synth backend flows through this module. Generators
//! built from a [`SynthConfig`](wavegen_spec::SynthConfig) get independent
//! streams derived from the config seed, so the same config always renders
//! the same audio. Entropy seeding is available for callers that want fresh
//! noise on every run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Draws a seed from the thread-local entropy source.
pub fn entropy_seed() -> u32 {
    rand::thread_rng().gen()
}

/// Draws one uniform sample from `[-1, 1)`.
#[inline]
pub fn uniform_bipolar(rng: &mut Pcg32) -> f64 {
    rng.gen::<f64>() * 2.0 - 1.0
}

/// Derives a seed for a named component from the base seed.
///
/// Hashes the base seed (little-endian) followed by the UTF-8 key and keeps
/// the first four bytes of the digest.
///
/// # Arguments
/// * `base_seed` - The config's base seed
/// * `key` - A string identifier for the component (e.g. "digitar/wave_source")
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());
    truncate_hash(&input)
}

/// Derives a seed for the `index`-th member of a collection.
pub fn derive_index_seed(base_seed: u32, index: u32) -> u32 {
    let mut input = Vec::with_capacity(8);
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(&index.to_le_bytes());
    truncate_hash(&input)
}

fn truncate_hash(input: &[u8]) -> u32 {
    let hash = blake3::hash(input);
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&hash.as_bytes()[..4]);
    u32::from_le_bytes(bytes)
}
