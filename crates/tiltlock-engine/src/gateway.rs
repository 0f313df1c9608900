//! Traits for platform-specific rotation I/O.
//!
//! Platform differences live entirely behind these two traits, selected at
//! composition time: the controller never branches on platform or OS
//! version. Production implementations wrap the native rotation APIs; the
//! test harness provides scripted in-memory implementations.

use tiltlock_core::{Orientation, OrientationMask};

use crate::{GatewayError, tracker::RotationSink};

/// The platform call that actually performs (or releases) a rotation.
///
/// `request_orientation` is dispatch-only: it must return promptly, and
/// the visual rotation completes asynchronously after an OS-determined
/// delay, or not at all. Callers record intent before the outcome is
/// known and never roll it back; completion reporting is diagnostics-only
/// and belongs inside the implementation.
pub trait RotationGateway: Send {
    /// Ask the OS to restrict interface rotation to `mask`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot even be dispatched, e.g.
    /// no window is attached. Dispatch failure does not invalidate the
    /// caller's lock intent.
    fn request_orientation(&mut self, mask: OrientationMask) -> Result<(), GatewayError>;

    /// Best-effort read of the interface orientation currently rendered.
    ///
    /// Preferred seed for the device orientation at startup; `None` where
    /// the platform cannot answer (no scene yet, headless test).
    fn current_interface_orientation(&self) -> Option<Orientation>;

    /// Probe the platform's auto-rotate capability.
    ///
    /// `Ok(None)` means the platform has no answer at all (and the caller
    /// should report absence, not a default).
    ///
    /// # Errors
    ///
    /// Returns an error when the probe itself failed; the caller
    /// substitutes [`AutoRotateStatus::default`].
    fn auto_rotate_status(&self) -> Result<Option<AutoRotateStatus>, GatewayError>;

    /// Whether this platform can render an upside-down portrait interface.
    fn supports_upside_down(&self) -> bool;
}

/// The raw device rotation signal.
///
/// `start` physically subscribes to the hardware signal and forwards every
/// reading into `sink`; `stop` physically tears the subscription down.
/// After `stop` returns the implementation must not invoke the sink again
/// — the tracker relies on this for its synchronous cancellation
/// guarantee, and a merely-gated subscription would keep burning sensor
/// battery.
pub trait RotationSignalSource: Send {
    /// Subscribe to the hardware rotation signal.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform cannot deliver rotation readings.
    fn start(&mut self, sink: RotationSink) -> Result<(), GatewayError>;

    /// Tear the subscription down. Idempotent.
    fn stop(&mut self);
}

/// Result of the auto-rotate capability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoRotateStatus {
    /// Whether the user has system-wide auto-rotate enabled.
    pub auto_rotate_enabled: bool,
    /// Whether the device can detect orientation at all.
    pub can_detect_orientation: bool,
}

impl Default for AutoRotateStatus {
    /// The documented substitute when the probe fails: assume rotation is
    /// allowed, claim no detection capability.
    fn default() -> Self {
        Self { auto_rotate_enabled: true, can_detect_orientation: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_failure_defaults() {
        let status = AutoRotateStatus::default();
        assert!(status.auto_rotate_enabled);
        assert!(!status.can_detect_orientation);
    }
}
