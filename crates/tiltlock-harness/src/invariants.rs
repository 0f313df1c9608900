//! Reconciliation invariant checks.
//!
//! Behavioral assertions shared by integration, property, and fuzz tests:
//! they verify WHAT must hold in every reachable state, not a specific
//! scenario.

use tiltlock_core::OrientationSnapshot;

/// Assert the defining invariant: the current orientation is the locked
/// orientation while locked and the device orientation otherwise.
///
/// # Panics
///
/// Panics with `context` when the snapshot violates the invariant.
pub fn assert_reconciled(snapshot: &OrientationSnapshot, context: &str) {
    let expected =
        if snapshot.is_locked { snapshot.locked_orientation } else { snapshot.device_orientation };
    assert_eq!(
        snapshot.current(),
        expected,
        "current orientation diverged from lock/device reconciliation: {context}"
    );
}

/// Assert no flat or unrenderable state leaked into the observable values.
///
/// # Panics
///
/// Panics with `context` when a flat state is observable as current or
/// device orientation, or recorded as a lock target.
pub fn assert_stable(snapshot: &OrientationSnapshot, context: &str) {
    assert!(
        !snapshot.current().is_flat(),
        "flat state surfaced as current orientation: {context}"
    );
    assert!(
        !snapshot.device_orientation.is_flat(),
        "flat state recorded as device orientation: {context}"
    );
    assert!(
        !snapshot.locked_orientation.is_flat(),
        "flat state recorded as lock target: {context}"
    );
}

#[cfg(test)]
mod tests {
    use tiltlock_core::Orientation;

    use super::*;

    #[test]
    fn default_snapshot_passes() {
        let snapshot = OrientationSnapshot::default();
        assert_reconciled(&snapshot, "default");
        assert_stable(&snapshot, "default");
    }

    #[test]
    fn locked_snapshot_passes() {
        let snapshot = OrientationSnapshot {
            locked_orientation: Orientation::LandscapeLeft,
            is_locked: true,
            device_orientation: Orientation::Portrait,
        };
        assert_reconciled(&snapshot, "locked");
        assert_stable(&snapshot, "locked");
    }
}
