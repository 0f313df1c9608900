//! Two-channel event notification broker.
//!
//! Internal state transitions are published to an in-process broker that
//! fans out to zero or more subscribers, each holding an individually
//! disposable handle (drop it to unsubscribe). The two channels are
//! independent and deliberately behave differently:
//!
//! - **device-orientation-changed** fires only on actual transitions (the
//!   tracker debounces identical readings before publishing).
//! - **lock-orientation-changed** fires after every lock/unlock call, even
//!   when the requested lock equals the previous one: re-asserting a lock
//!   is a meaningful application intent.
//!
//! Channels are bounded; a subscriber that falls behind skips the readings
//! it missed and keeps receiving. Stale orientation events are worthless,
//! so skipping is the correct lag policy here.

use serde::{Deserialize, Serialize};
use tiltlock_core::{FaceDirection, Orientation, SharedOrientationState};
use tokio::sync::broadcast;

/// Events kept per subscriber before lagging sets in.
const CHANNEL_CAPACITY: usize = 16;

/// Payload of the device-orientation-changed channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceOrientationChanged {
    /// The new device orientation (never a flat state).
    pub orientation: Orientation,
    /// Which way the screen faces while the device lies flat. Optional
    /// extension; absent for ordinary rotations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_direction: Option<FaceDirection>,
}

/// Payload of the lock-orientation-changed channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockStateChanged {
    /// The locked orientation, or `None` whenever unlocked — explicit
    /// absence, never the stale locked value.
    pub orientation: Option<Orientation>,
    /// Whether a lock is in effect.
    pub is_locked: bool,
}

/// The in-process broker behind both notification channels.
///
/// Cheap to clone; clones publish into and subscribe to the same channels.
#[derive(Debug, Clone)]
pub struct OrientationEventBus {
    device_tx: broadcast::Sender<DeviceOrientationChanged>,
    lock_tx: broadcast::Sender<LockStateChanged>,
}

impl Default for OrientationEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationEventBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        let (device_tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (lock_tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { device_tx, lock_tx }
    }

    /// Publish a device orientation transition.
    pub fn emit_device_change(
        &self,
        orientation: Orientation,
        face_direction: Option<FaceDirection>,
    ) {
        let event = DeviceOrientationChanged { orientation, face_direction };
        tracing::debug!(orientation = %event.orientation, "device orientation changed");
        // Send only fails with zero subscribers, which is fine.
        let _ = self.device_tx.send(event);
    }

    /// Publish the lock state as currently observable.
    ///
    /// The payload is read back from the shared state rather than built
    /// from the caller's arguments, so it can never disagree with what a
    /// concurrent query would return.
    pub fn emit_lock_change(&self, state: &SharedOrientationState) {
        let snapshot = state.snapshot();
        let event = LockStateChanged {
            orientation: snapshot.is_locked.then_some(snapshot.locked_orientation),
            is_locked: snapshot.is_locked,
        };
        tracing::debug!(is_locked = event.is_locked, "lock state changed");
        let _ = self.lock_tx.send(event);
    }

    /// Subscribe to device-orientation-changed notifications.
    pub fn device_events(&self) -> DeviceOrientationEvents {
        EventSubscription { rx: self.device_tx.subscribe() }
    }

    /// Subscribe to lock-orientation-changed notifications.
    pub fn lock_events(&self) -> LockStateEvents {
        EventSubscription { rx: self.lock_tx.subscribe() }
    }
}

/// A disposable subscription to one notification channel.
///
/// Dropping the subscription unregisters the listener. A subscriber that
/// lags skips the events it missed and continues with the newest ones.
#[derive(Debug)]
pub struct EventSubscription<T> {
    rx: broadcast::Receiver<T>,
}

/// Subscription handle for device-orientation-changed events.
pub type DeviceOrientationEvents = EventSubscription<DeviceOrientationChanged>;

/// Subscription handle for lock-orientation-changed events.
pub type LockStateEvents = EventSubscription<LockStateChanged>;

impl<T: Clone> EventSubscription<T> {
    /// Wait for the next event. Returns `None` once the bus is gone.
    pub async fn recv(&mut self) -> Option<T> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "event subscriber lagged; skipping");
                },
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Take the next event without waiting. Returns `None` when no event
    /// is ready (or the bus is gone).
    pub fn try_recv(&mut self) -> Option<T> {
        loop {
            match self.rx.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(_)) => {},
                Err(
                    broadcast::error::TryRecvError::Empty
                    | broadcast::error::TryRecvError::Closed,
                ) => return None,
            }
        }
    }
}
