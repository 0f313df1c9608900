//! Seeded rotation scripts for chaos-style tests.
//!
//! Reproducible pseudo-random angle sequences spanning the full noisy
//! range a real sensor produces: valid band angles, boundary values, and
//! out-of-range garbage the classifier must reject.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tiltlock_core::RawRotation;

/// Deterministic sequence of raw angle readings for the given seed.
///
/// Angles are drawn from `[-30, 390)` so roughly one reading in eight
/// falls outside the classifiable range and exercises the rejection path.
pub fn angles(seed: u64, len: usize) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-30..390)).collect()
}

/// Deterministic sequence of raw readings including the unknown sentinel.
///
/// One reading in ten is [`RawRotation::Unknown`], matching how often a
/// real sensor fails to settle.
pub fn readings(seed: u64, len: usize) -> Vec<RawRotation> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            if rng.gen_ratio(1, 10) {
                RawRotation::Unknown
            } else {
                RawRotation::Degrees(rng.gen_range(-30..390))
            }
        })
        .collect()
}
