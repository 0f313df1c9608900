//! Application-facing facade.
//!
//! Wires the controller, tracker, and event bus over one shared state and
//! exposes the external contract: string-typed lock requests that never
//! fail, idempotent tracking control, synchronous queries, the best-effort
//! capability probe, and the two event subscription points.
//!
//! Construction seeds the state from the platform (best-effort interface
//! orientation read), then from the host's boot declaration, so the first
//! query already answers consistently.

use tiltlock_core::{
    LandscapeDirection, Orientation, OrientationMask, OrientationSnapshot, PortraitDirection,
    SharedOrientationState,
};

use crate::config::BootOrientation;
use crate::controller::OrientationController;
use crate::events::{DeviceOrientationEvents, LockStateEvents, OrientationEventBus};
use crate::gateway::{AutoRotateStatus, RotationGateway, RotationSignalSource};
use crate::tracker::DeviceOrientationTracker;

/// The orientation engine's application surface.
///
/// Generic over the platform gateway and signal source so the same engine
/// runs against real platform bindings and against the scripted harness
/// implementations in tests.
#[derive(Debug)]
pub struct OrientationService<G: RotationGateway, S: RotationSignalSource> {
    state: SharedOrientationState,
    events: OrientationEventBus,
    controller: OrientationController<G>,
    tracker: DeviceOrientationTracker<S>,
}

impl<G: RotationGateway, S: RotationSignalSource> OrientationService<G, S> {
    /// Compose a service from platform implementations and the host's
    /// boot declaration.
    pub fn new(gateway: G, source: S, boot: BootOrientation) -> Self {
        // Prefer the platform's own idea of the rendered orientation as
        // the initial device reading; flat or absent answers fall back to
        // portrait.
        let device_orientation = gateway
            .current_interface_orientation()
            .filter(|orientation| !orientation.is_flat())
            .unwrap_or_default();
        let state = SharedOrientationState::new(OrientationSnapshot {
            device_orientation,
            ..OrientationSnapshot::default()
        });
        Self::seed_boot_declaration(&state, boot);

        let events = OrientationEventBus::new();
        let controller = OrientationController::new(gateway, state.clone());
        let tracker = DeviceOrientationTracker::new(source, state.clone(), events.clone());
        Self { state, events, controller, tracker }
    }

    /// Apply the boot declaration, but never clobber an explicit lock
    /// recorded before seeding ran.
    fn seed_boot_declaration(state: &SharedOrientationState, boot: BootOrientation) {
        let snapshot = state.snapshot();
        if snapshot.is_locked || snapshot.locked_orientation != Orientation::Portrait {
            return;
        }
        let (orientation, locked) = boot.initial_state();
        if locked {
            state.set_state(orientation, true, None);
            tracing::debug!(%orientation, "seeded lock from boot declaration");
        }
    }

    /// Lock to portrait; `Some("UPSIDE_DOWN")` selects the inverted
    /// variant where the platform supports it. Emits one lock-state
    /// notification, always.
    pub fn lock_to_portrait(&mut self, direction: Option<&str>) {
        self.controller.lock_to_portrait(PortraitDirection::from_request(direction));
        self.events.emit_lock_change(&self.state);
    }

    /// Lock to landscape. Unrecognized direction strings deterministically
    /// fall back to `LEFT`. Emits one lock-state notification, always.
    pub fn lock_to_landscape(&mut self, direction: &str) {
        self.controller.lock_to_landscape(LandscapeDirection::from_request(direction));
        self.events.emit_lock_change(&self.state);
    }

    /// Release the lock. Emits one lock-state notification with an absent
    /// orientation, always.
    pub fn unlock_all_orientations(&mut self) {
        self.controller.unlock_all_orientations();
        self.events.emit_lock_change(&self.state);
    }

    /// Start device rotation tracking. Idempotent.
    pub fn start_orientation_tracking(&mut self) {
        self.tracker.start_tracking();
    }

    /// Stop device rotation tracking and tear down the hardware
    /// subscription. Idempotent; after this returns no further device
    /// notifications fire.
    pub fn stop_orientation_tracking(&mut self) {
        self.tracker.stop_tracking();
    }

    /// The externally observable orientation: locked orientation while
    /// locked, device orientation otherwise. Never blocks, never fails.
    pub fn current_orientation(&self) -> Orientation {
        self.controller.current_orientation()
    }

    /// The raw device orientation, regardless of lock state.
    pub fn current_device_orientation(&self) -> Orientation {
        self.controller.current_device_orientation()
    }

    /// Whether a lock is in effect.
    pub fn is_locked(&self) -> bool {
        self.controller.is_locked()
    }

    /// One consistent observation of the full orientation state.
    pub fn state_snapshot(&self) -> OrientationSnapshot {
        self.state.snapshot()
    }

    /// The rotation set the window subsystem may currently render. Hosts
    /// poll this from their rotation callback; it is what enforces the
    /// lock.
    pub fn supported_orientation_mask(&self) -> OrientationMask {
        self.controller.supported_orientation_mask()
    }

    /// Best-effort auto-rotate capability probe.
    ///
    /// Never fails: `None` where the platform has no answer at all; a
    /// failed probe is logged and replaced with the documented defaults
    /// (auto-rotate assumed on, detection assumed absent).
    pub fn device_auto_rotate_status(&self) -> Option<AutoRotateStatus> {
        match self.controller.auto_rotate_status() {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(%err, "auto-rotate probe failed; substituting defaults");
                Some(AutoRotateStatus::default())
            },
        }
    }

    /// Subscribe to device-orientation-changed notifications. Drop the
    /// handle to unsubscribe.
    pub fn on_orientation_change(&self) -> DeviceOrientationEvents {
        self.events.device_events()
    }

    /// Subscribe to lock-orientation-changed notifications. Drop the
    /// handle to unsubscribe.
    pub fn on_lock_orientation_change(&self) -> LockStateEvents {
        self.events.lock_events()
    }
}
