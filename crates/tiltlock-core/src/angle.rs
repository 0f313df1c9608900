//! Raw rotation angle classification.
//!
//! Maps a pre-classified sensor angle reading into a logical orientation
//! using fixed angular bands. The bands are disjoint and never change at
//! runtime; angles falling between bands are boundary noise and classify
//! to nothing rather than to the nearest band.

use crate::orientation::{FaceDirection, Orientation};

/// The fixed angular bands, in degrees, inclusive on both ends.
///
/// The inverted band deliberately folds to portrait: the platforms this
/// engine targets rarely support upside-down interfaces, and reporting an
/// orientation the window subsystem cannot render would desync the
/// observable state.
pub mod bands {
    /// Start of the primary portrait band.
    pub const PORTRAIT_PRIMARY_START: i32 = 0;
    /// End of the primary portrait band.
    pub const PORTRAIT_PRIMARY_END: i32 = 44;
    /// Start of the secondary portrait band (wraps toward 0).
    pub const PORTRAIT_SECONDARY_START: i32 = 315;
    /// End of the secondary portrait band.
    pub const PORTRAIT_SECONDARY_END: i32 = 359;
    /// Start of the landscape-right band.
    pub const LANDSCAPE_RIGHT_START: i32 = 45;
    /// End of the landscape-right band.
    pub const LANDSCAPE_RIGHT_END: i32 = 134;
    /// Start of the inverted portrait band (folds to portrait).
    pub const PORTRAIT_INVERTED_START: i32 = 135;
    /// End of the inverted portrait band.
    pub const PORTRAIT_INVERTED_END: i32 = 224;
    /// Start of the landscape-left band.
    pub const LANDSCAPE_LEFT_START: i32 = 225;
    /// End of the landscape-left band.
    pub const LANDSCAPE_LEFT_END: i32 = 314;
}

/// Classify a raw rotation angle into a logical orientation.
///
/// Pure and total: any angle outside the defined bands, including
/// negatives and values of 360 or more, returns `None`. The caller is
/// responsible for filtering the platform's "orientation unknown" sentinel
/// before classification.
pub fn classify(angle: i32) -> Option<Orientation> {
    match angle {
        bands::PORTRAIT_PRIMARY_START..=bands::PORTRAIT_PRIMARY_END
        | bands::PORTRAIT_SECONDARY_START..=bands::PORTRAIT_SECONDARY_END => {
            Some(Orientation::Portrait)
        },
        bands::LANDSCAPE_RIGHT_START..=bands::LANDSCAPE_RIGHT_END => {
            Some(Orientation::LandscapeRight)
        },
        bands::PORTRAIT_INVERTED_START..=bands::PORTRAIT_INVERTED_END => {
            Some(Orientation::Portrait)
        },
        bands::LANDSCAPE_LEFT_START..=bands::LANDSCAPE_LEFT_END => {
            Some(Orientation::LandscapeLeft)
        },
        _ => None,
    }
}

/// One raw rotation reading from the platform's sensor subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawRotation {
    /// A rotation angle in degrees, nominally within `[0, 360)`.
    Degrees(i32),
    /// Device lying flat; no meaningful rotation angle.
    Flat(FaceDirection),
    /// The platform could not determine an orientation.
    Unknown,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(classify(0), Some(Orientation::Portrait));
        assert_eq!(classify(44), Some(Orientation::Portrait));
        assert_eq!(classify(45), Some(Orientation::LandscapeRight));
        assert_eq!(classify(134), Some(Orientation::LandscapeRight));
        assert_eq!(classify(135), Some(Orientation::Portrait));
        assert_eq!(classify(224), Some(Orientation::Portrait));
        assert_eq!(classify(225), Some(Orientation::LandscapeLeft));
        assert_eq!(classify(314), Some(Orientation::LandscapeLeft));
        assert_eq!(classify(315), Some(Orientation::Portrait));
        assert_eq!(classify(359), Some(Orientation::Portrait));
    }

    #[test]
    fn out_of_range_angles_are_rejected() {
        assert_eq!(classify(-1), None);
        assert_eq!(classify(360), None);
        assert_eq!(classify(i32::MIN), None);
        assert_eq!(classify(i32::MAX), None);
    }

    proptest! {
        #[test]
        fn in_range_angles_always_classify(angle in 0i32..360) {
            prop_assert!(classify(angle).is_some());
        }

        #[test]
        fn classification_never_yields_flat_or_inverted(angle in any::<i32>()) {
            if let Some(orientation) = classify(angle) {
                prop_assert!(!orientation.is_flat());
                prop_assert!(orientation != Orientation::PortraitUpsideDown);
            }
        }
    }
}
