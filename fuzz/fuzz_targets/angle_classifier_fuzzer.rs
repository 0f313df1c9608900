//! Fuzz target for the angle classifier
//!
//! # Strategy
//!
//! Arbitrary `i32` angles, including negatives, out-of-range values, and
//! the extremes.
//!
//! # Invariants
//!
//! - Classification NEVER panics
//! - Only in-band angles classify; everything in [0, 360) is in-band
//! - Classified orientations are stable (never flat, never inverted)
//! - Classification is deterministic

#![no_main]

use libfuzzer_sys::fuzz_target;
use tiltlock_core::{Orientation, classify};

fuzz_target!(|angle: i32| {
    let classified = classify(angle);
    assert_eq!(classified, classify(angle));

    match classified {
        Some(orientation) => {
            assert!((0..360).contains(&angle));
            assert!(matches!(
                orientation,
                Orientation::Portrait
                    | Orientation::LandscapeLeft
                    | Orientation::LandscapeRight
            ));
        }
        None => {
            assert!(!(0..360).contains(&angle));
        }
    }
});
