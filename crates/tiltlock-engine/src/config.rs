//! Static boot orientation declaration.
//!
//! Some hosts declare a launch orientation ahead of time (the Android
//! manifest `screenOrientation` attribute is the canonical example). The
//! engine reads that declaration once at startup to seed the shared state
//! so the first query already reflects what the host declared, before any
//! lock call or sensor reading arrives.

use serde::{Deserialize, Serialize};
use tiltlock_core::Orientation;

/// Host-declared launch orientation, read once at boot.
///
/// The variants mirror the platform's declaration vocabulary. Declarations
/// that pin an orientation seed a locked state; the free-rotation modes
/// seed portrait, unlocked. Inverted portrait folds to upright portrait
/// and the sensor-landscape mode to landscape-right, matching what the
/// platform actually renders at launch for those declarations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BootOrientation {
    /// No declaration; the platform chooses freely.
    #[default]
    Unspecified,
    /// Pinned upright portrait.
    Portrait,
    /// Pinned inverted portrait (folds to upright).
    ReversePortrait,
    /// Pinned landscape.
    Landscape,
    /// Pinned reverse landscape.
    ReverseLandscape,
    /// Sensor-driven but portrait only.
    SensorPortrait,
    /// Sensor-driven but landscape only.
    SensorLandscape,
    /// Fully sensor-driven, all four rotations.
    FullSensor,
    /// Rotation follows the user's system preference.
    User,
}

impl BootOrientation {
    /// The `(locked_orientation, is_locked)` pair this declaration seeds.
    pub fn initial_state(self) -> (Orientation, bool) {
        match self {
            Self::Portrait | Self::ReversePortrait | Self::SensorPortrait => {
                (Orientation::Portrait, true)
            },
            Self::Landscape | Self::SensorLandscape => (Orientation::LandscapeRight, true),
            Self::ReverseLandscape => (Orientation::LandscapeLeft, true),
            Self::Unspecified | Self::FullSensor | Self::User => (Orientation::Portrait, false),
        }
    }
}
