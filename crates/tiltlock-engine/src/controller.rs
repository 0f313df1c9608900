//! Lock request handling.
//!
//! The controller validates and normalizes lock requests, issues exactly
//! one gateway request and one combined state update per call, and answers
//! the externally visible queries. It emits no application-facing events —
//! the facade does that after the mutation completes — so the same
//! controller can back surfaces with different notification schemes.
//!
//! Failure policy: the gateway request is fire-and-forget. If dispatch
//! fails (say, no window is attached yet) the error is logged and the lock
//! intent is recorded anyway; the OS-visible rotation reconciles once the
//! platform can apply it. Intent over immediate effect.

use tiltlock_core::{
    LandscapeDirection, Orientation, OrientationMask, PortraitDirection, SharedOrientationState,
};

use crate::GatewayError;
use crate::gateway::{AutoRotateStatus, RotationGateway};

/// Validates lock requests and drives the platform rotation gateway.
#[derive(Debug)]
pub struct OrientationController<G: RotationGateway> {
    gateway: G,
    state: SharedOrientationState,
}

impl<G: RotationGateway> OrientationController<G> {
    /// Create a controller over the given gateway and shared state.
    pub fn new(gateway: G, state: SharedOrientationState) -> Self {
        Self { gateway, state }
    }

    /// Lock the interface to portrait.
    ///
    /// `UpsideDown` degrades to upright portrait on platforms that cannot
    /// render an inverted interface. This is a documented degradation, not
    /// a silent failure: the effective orientation is what gets recorded
    /// and reported, and the degradation is logged.
    pub fn lock_to_portrait(&mut self, direction: PortraitDirection) {
        let target = match direction {
            PortraitDirection::Up => Orientation::Portrait,
            PortraitDirection::UpsideDown if self.gateway.supports_upside_down() => {
                Orientation::PortraitUpsideDown
            },
            PortraitDirection::UpsideDown => {
                tracing::debug!("upside-down portrait unsupported; degrading to portrait");
                Orientation::Portrait
            },
        };
        self.apply_lock(target);
    }

    /// Lock the interface to the given landscape direction.
    pub fn lock_to_landscape(&mut self, direction: LandscapeDirection) {
        self.apply_lock(direction.orientation());
    }

    /// Release the lock and request unrestricted rotation.
    ///
    /// The locked orientation is left at its last value; it is inert while
    /// unlocked and ignored by every observable query.
    pub fn unlock_all_orientations(&mut self) {
        self.request(OrientationMask::ALL);
        self.state.set_locked(false);
    }

    /// The externally observable orientation.
    pub fn current_orientation(&self) -> Orientation {
        self.state.current_orientation()
    }

    /// The raw device orientation, regardless of lock state.
    pub fn current_device_orientation(&self) -> Orientation {
        self.state.device_orientation()
    }

    /// Whether a lock is in effect.
    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    /// The rotation set the window subsystem may currently render: exactly
    /// the locked orientation while locked, everything otherwise. This is
    /// what actually enforces the lock at the OS level.
    pub fn supported_orientation_mask(&self) -> OrientationMask {
        let snapshot = self.state.snapshot();
        if snapshot.is_locked {
            snapshot.locked_orientation.interface_mask()
        } else {
            OrientationMask::ALL
        }
    }

    /// Raw auto-rotate capability probe; the facade applies the failure
    /// defaults.
    pub fn auto_rotate_status(&self) -> Result<Option<AutoRotateStatus>, GatewayError> {
        self.gateway.auto_rotate_status()
    }

    fn apply_lock(&mut self, target: Orientation) {
        self.request(target.interface_mask());
        // One combined update: the lock flag and orientation change as a
        // unit so no observer sees a fresh flag with a stale orientation.
        self.state.set_lock(target, true);
    }

    fn request(&mut self, mask: OrientationMask) {
        if let Err(err) = self.gateway.request_orientation(mask) {
            tracing::warn!(%err, ?mask, "rotation request not dispatched; intent recorded");
        }
    }
}
