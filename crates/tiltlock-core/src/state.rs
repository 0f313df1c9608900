//! Authoritative orientation state.
//!
//! One shared, explicitly injected state object holds the lock flag, the
//! locked orientation, and the last classified device orientation. The
//! device-sensor callback and application-facing controller calls arrive
//! on different execution contexts, so every access goes through a
//! readers-writer boundary: concurrent reads proceed together, any write
//! excludes everything else.
//!
//! The defining invariant is encoded in [`OrientationSnapshot::current`]:
//! the observable orientation *is* the locked orientation while locked and
//! the device orientation otherwise. It is computed from one consistent
//! snapshot, never cached, so it cannot desync.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::orientation::Orientation;

/// One consistent observation of the orientation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrientationSnapshot {
    /// Orientation applied while locked. Inert (but retained) when
    /// unlocked.
    pub locked_orientation: Orientation,
    /// Whether a lock is in effect.
    pub is_locked: bool,
    /// Last classified raw device orientation, independent of lock state.
    pub device_orientation: Orientation,
}

impl OrientationSnapshot {
    /// The externally observable orientation.
    pub fn current(&self) -> Orientation {
        if self.is_locked { self.locked_orientation } else { self.device_orientation }
    }
}

/// Cloneable handle to the shared orientation state.
///
/// Cheap to clone; all clones observe and mutate the same state. Lock
/// poisoning is recovered rather than propagated: the snapshot is plain
/// data updated in single assignments, so a panicking holder cannot leave
/// it torn.
#[derive(Debug, Clone, Default)]
pub struct SharedOrientationState {
    inner: Arc<RwLock<OrientationSnapshot>>,
}

impl SharedOrientationState {
    /// Create shared state from an initial snapshot.
    pub fn new(initial: OrientationSnapshot) -> Self {
        Self { inner: Arc::new(RwLock::new(initial)) }
    }

    fn read(&self) -> RwLockReadGuard<'_, OrientationSnapshot> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, OrientationSnapshot> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// One consistent observation of all three fields.
    pub fn snapshot(&self) -> OrientationSnapshot {
        *self.read()
    }

    /// The externally observable orientation (locked orientation while
    /// locked, device orientation otherwise).
    pub fn current_orientation(&self) -> Orientation {
        self.read().current()
    }

    /// Last classified raw device orientation, regardless of lock state.
    pub fn device_orientation(&self) -> Orientation {
        self.read().device_orientation
    }

    /// Orientation applied while locked.
    pub fn locked_orientation(&self) -> Orientation {
        self.read().locked_orientation
    }

    /// Whether a lock is in effect.
    pub fn is_locked(&self) -> bool {
        self.read().is_locked
    }

    /// Record a lock transition: both fields change as one unit so no
    /// reader can observe a fresh lock flag with a stale orientation.
    pub fn set_lock(&self, orientation: Orientation, locked: bool) {
        let mut state = self.write();
        state.locked_orientation = orientation;
        state.is_locked = locked;
    }

    /// Flip only the lock flag, leaving the locked orientation at its last
    /// value (inert while unlocked).
    pub fn set_locked(&self, locked: bool) {
        self.write().is_locked = locked;
    }

    /// Overwrite the device orientation.
    pub fn set_device_orientation(&self, orientation: Orientation) {
        self.write().device_orientation = orientation;
    }

    /// Atomic combined setter: lock fields always, device orientation when
    /// given, all under one write guard.
    pub fn set_state(
        &self,
        locked_orientation: Orientation,
        is_locked: bool,
        device_orientation: Option<Orientation>,
    ) {
        let mut state = self.write();
        state.locked_orientation = locked_orientation;
        state.is_locked = is_locked;
        if let Some(device) = device_orientation {
            state.device_orientation = device;
        }
    }

    /// Compare-and-set for the tracker's debounce: updates the device
    /// orientation and returns `true` only if it actually changed. The
    /// comparison and the write share one guard so interleaved sensor
    /// callbacks cannot double-report a transition.
    pub fn update_device_if_changed(&self, orientation: Orientation) -> bool {
        let mut state = self.write();
        if state.device_orientation == orientation {
            return false;
        }
        state.device_orientation = orientation;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_portrait_unlocked() {
        let state = SharedOrientationState::default();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.locked_orientation, Orientation::Portrait);
        assert!(!snapshot.is_locked);
        assert_eq!(snapshot.device_orientation, Orientation::Portrait);
        assert_eq!(snapshot.current(), Orientation::Portrait);
    }

    #[test]
    fn current_follows_lock_flag() {
        let state = SharedOrientationState::default();
        state.set_device_orientation(Orientation::LandscapeRight);
        assert_eq!(state.current_orientation(), Orientation::LandscapeRight);

        state.set_lock(Orientation::Portrait, true);
        assert_eq!(state.current_orientation(), Orientation::Portrait);

        state.set_locked(false);
        assert_eq!(state.current_orientation(), Orientation::LandscapeRight);
    }

    #[test]
    fn unlock_retains_last_locked_orientation() {
        let state = SharedOrientationState::default();
        state.set_lock(Orientation::LandscapeLeft, true);
        state.set_locked(false);

        assert_eq!(state.locked_orientation(), Orientation::LandscapeLeft);
        assert!(!state.is_locked());
    }

    #[test]
    fn combined_setter_updates_device_only_when_given() {
        let state = SharedOrientationState::default();
        state.set_device_orientation(Orientation::LandscapeRight);

        state.set_state(Orientation::Portrait, true, None);
        assert_eq!(state.device_orientation(), Orientation::LandscapeRight);

        state.set_state(Orientation::Portrait, true, Some(Orientation::LandscapeLeft));
        assert_eq!(state.device_orientation(), Orientation::LandscapeLeft);
    }

    #[test]
    fn update_device_if_changed_debounces() {
        let state = SharedOrientationState::default();
        assert!(state.update_device_if_changed(Orientation::LandscapeLeft));
        assert!(!state.update_device_if_changed(Orientation::LandscapeLeft));
        assert!(state.update_device_if_changed(Orientation::Portrait));
    }

    #[test]
    fn clones_share_the_same_state() {
        let state = SharedOrientationState::default();
        let alias = state.clone();
        alias.set_lock(Orientation::LandscapeRight, true);
        assert_eq!(state.current_orientation(), Orientation::LandscapeRight);
    }
}
