//! Domain model for Tiltlock
//!
//! Pure orientation types and logic shared by the engine and test harness:
//! no I/O, no runtime, no platform bindings.
//!
//! # Components
//!
//! - [`Orientation`] and friends: the closed set of logical orientations,
//!   lock directions, and their wire strings
//! - [`OrientationMask`]: the set of interface rotations the window
//!   subsystem is currently permitted to render
//! - [`classify`]: raw rotation angle to logical orientation
//! - [`SharedOrientationState`]: the authoritative lock/device state,
//!   serialized behind a readers-writer boundary

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod angle;
mod mask;
mod orientation;
mod state;

pub use angle::{RawRotation, bands, classify};
pub use mask::OrientationMask;
pub use orientation::{FaceDirection, LandscapeDirection, Orientation, PortraitDirection};
pub use state::{OrientationSnapshot, SharedOrientationState};
