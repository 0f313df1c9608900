//! Logical orientation values and lock directions.
//!
//! [`Orientation`] is the closed set of values observable by applications.
//! The flat states ([`Orientation::FaceUp`], [`Orientation::FaceDown`]) are
//! reported by raw device sensors only: they are never accepted as lock
//! targets and never surface as the "current" orientation.
//!
//! Direction parsing never fails. Unrecognized request strings fall back to
//! a documented default so that callers on older or newer API revisions
//! degrade deterministically instead of erroring.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mask::OrientationMask;

/// A logical device or interface orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    /// Device upright, home indicator at the bottom.
    #[default]
    Portrait,
    /// Device upright but inverted. Not available on every platform.
    PortraitUpsideDown,
    /// Device rotated with the top of the screen to the left.
    LandscapeLeft,
    /// Device rotated with the top of the screen to the right.
    LandscapeRight,
    /// Device lying flat, screen up. Sensor-only; never a lock target.
    FaceUp,
    /// Device lying flat, screen down. Sensor-only; never a lock target.
    FaceDown,
}

impl Orientation {
    /// Wire string for this orientation, as delivered in event payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "PORTRAIT",
            Self::PortraitUpsideDown => "PORTRAIT_UPSIDE_DOWN",
            Self::LandscapeLeft => "LANDSCAPE_LEFT",
            Self::LandscapeRight => "LANDSCAPE_RIGHT",
            Self::FaceUp => "FACE_UP",
            Self::FaceDown => "FACE_DOWN",
        }
    }

    /// Whether this is one of the flat sensor-only states.
    pub fn is_flat(self) -> bool {
        matches!(self, Self::FaceUp | Self::FaceDown)
    }

    /// The interface rotation set this orientation corresponds to.
    ///
    /// Flat states have no interface rotation and map to the empty mask.
    pub fn interface_mask(self) -> OrientationMask {
        match self {
            Self::Portrait => OrientationMask::PORTRAIT,
            Self::PortraitUpsideDown => OrientationMask::PORTRAIT_UPSIDE_DOWN,
            Self::LandscapeLeft => OrientationMask::LANDSCAPE_LEFT,
            Self::LandscapeRight => OrientationMask::LANDSCAPE_RIGHT,
            Self::FaceUp | Self::FaceDown => OrientationMask::empty(),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which landscape rotation a lock request targets.
///
/// The logical convention is fixed across the whole crate: `Left` always
/// means [`Orientation::LandscapeLeft`] and `Right` always means
/// [`Orientation::LandscapeRight`]. Platform gateways own any translation
/// to native rotation constants, inverted or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LandscapeDirection {
    /// Lock to landscape-left.
    #[default]
    Left,
    /// Lock to landscape-right.
    Right,
}

impl LandscapeDirection {
    /// Parse a request string, falling back to `Left` for anything
    /// unrecognized.
    pub fn from_request(direction: &str) -> Self {
        match direction {
            "RIGHT" => Self::Right,
            _ => Self::Left,
        }
    }

    /// The orientation this direction locks to.
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Left => Orientation::LandscapeLeft,
            Self::Right => Orientation::LandscapeRight,
        }
    }
}

/// Which portrait variant a lock request targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortraitDirection {
    /// Standard upright portrait.
    #[default]
    Up,
    /// Inverted portrait. Degrades to upright where unsupported.
    UpsideDown,
}

impl PortraitDirection {
    /// Parse an optional request string; only `"UPSIDE_DOWN"` selects the
    /// inverted variant.
    pub fn from_request(direction: Option<&str>) -> Self {
        match direction {
            Some("UPSIDE_DOWN") => Self::UpsideDown,
            _ => Self::Up,
        }
    }
}

/// Which way the screen faces while the device lies flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FaceDirection {
    /// Screen facing up.
    Up,
    /// Screen facing down.
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_match_display() {
        for orientation in [
            Orientation::Portrait,
            Orientation::PortraitUpsideDown,
            Orientation::LandscapeLeft,
            Orientation::LandscapeRight,
            Orientation::FaceUp,
            Orientation::FaceDown,
        ] {
            assert_eq!(orientation.to_string(), orientation.as_str());
        }
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&Orientation::PortraitUpsideDown)
            .unwrap_or_default();
        assert_eq!(json, "\"PORTRAIT_UPSIDE_DOWN\"");

        let json = serde_json::to_string(&Orientation::FaceUp).unwrap_or_default();
        assert_eq!(json, "\"FACE_UP\"");
    }

    #[test]
    fn landscape_direction_parses_known_strings() {
        assert_eq!(LandscapeDirection::from_request("LEFT"), LandscapeDirection::Left);
        assert_eq!(LandscapeDirection::from_request("RIGHT"), LandscapeDirection::Right);
    }

    #[test]
    fn unknown_landscape_direction_falls_back_to_left() {
        assert_eq!(LandscapeDirection::from_request("NORTH"), LandscapeDirection::Left);
        assert_eq!(LandscapeDirection::from_request(""), LandscapeDirection::Left);
        assert_eq!(LandscapeDirection::from_request("right"), LandscapeDirection::Left);
    }

    #[test]
    fn portrait_direction_defaults_to_upright() {
        assert_eq!(PortraitDirection::from_request(None), PortraitDirection::Up);
        assert_eq!(PortraitDirection::from_request(Some("UP")), PortraitDirection::Up);
        assert_eq!(
            PortraitDirection::from_request(Some("UPSIDE_DOWN")),
            PortraitDirection::UpsideDown
        );
    }

    #[test]
    fn flat_states_have_empty_interface_mask() {
        assert!(Orientation::FaceUp.interface_mask().is_empty());
        assert!(Orientation::FaceDown.interface_mask().is_empty());
        assert!(!Orientation::Portrait.interface_mask().is_empty());
    }
}
