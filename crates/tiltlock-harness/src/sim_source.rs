//! Hand-cranked rotation signal implementing [`RotationSignalSource`].
//!
//! The source and the feed share one slot holding the engine's sink.
//! `start` fills the slot, `stop` empties it, and the feed only delivers
//! while the slot is full — the same physical-teardown behavior a real
//! sensor subscription has, which is exactly what the tracker's
//! stop-means-stop guarantee depends on.

use std::sync::{Arc, Mutex, PoisonError};

use tiltlock_core::RawRotation;
use tiltlock_engine::{GatewayError, RotationSignalSource, RotationSink};

type SharedSlot = Arc<Mutex<Option<RotationSink>>>;

/// Scripted in-memory [`RotationSignalSource`].
#[derive(Debug, Default)]
pub struct SimRotationSource {
    slot: SharedSlot,
    start_failure: Option<GatewayError>,
}

impl SimRotationSource {
    /// Create a source plus the feed tests use to crank readings into it.
    pub fn new() -> (Self, SimSignalFeed) {
        let slot: SharedSlot = Arc::default();
        (Self { slot: slot.clone(), start_failure: None }, SimSignalFeed { slot })
    }

    /// Fail every `start` call with the given error.
    #[must_use]
    pub fn with_start_failure(mut self, error: GatewayError) -> Self {
        self.start_failure = Some(error);
        self
    }
}

impl RotationSignalSource for SimRotationSource {
    fn start(&mut self, sink: RotationSink) -> Result<(), GatewayError> {
        if let Some(error) = &self.start_failure {
            return Err(error.clone());
        }
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(sink);
        Ok(())
    }

    fn stop(&mut self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Test-side crank for a [`SimRotationSource`].
#[derive(Debug, Clone)]
pub struct SimSignalFeed {
    slot: SharedSlot,
}

impl SimSignalFeed {
    /// Deliver one raw reading. Returns `false` when the subscription is
    /// torn down (the reading goes nowhere, as on real hardware).
    pub fn emit(&self, rotation: RawRotation) -> bool {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some(sink) => {
                sink.push(rotation);
                true
            },
            None => false,
        }
    }

    /// Deliver an angle reading in degrees.
    pub fn angle(&self, degrees: i32) -> bool {
        self.emit(RawRotation::Degrees(degrees))
    }

    /// Whether the engine currently holds a live subscription.
    pub fn is_subscribed(&self) -> bool {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}
