//! Device rotation tracking.
//!
//! A two-state machine (stopped/started, idempotent in both directions)
//! around the platform's raw rotation signal. While started, every reading
//! flows through [`RotationSink::push`]: the unknown sentinel is dropped,
//! angles are classified, identical readings are debounced, and only
//! actual transitions update the shared state and notify subscribers.
//!
//! Stopping physically tears the hardware subscription down via
//! [`RotationSignalSource::stop`] rather than gating a flag; once
//! `stop_tracking` returns, no further device-orientation notifications
//! fire.

use std::sync::{Arc, Mutex, PoisonError};

use tiltlock_core::{FaceDirection, RawRotation, SharedOrientationState, classify};

use crate::OrientationEventBus;
use crate::gateway::RotationSignalSource;

/// Where a signal source delivers raw rotation readings.
///
/// Cheap to clone; the source keeps one for the lifetime of its
/// subscription. Pushing is safe from any thread — the sink serializes
/// against application-side state access internally.
#[derive(Debug, Clone)]
pub struct RotationSink {
    state: SharedOrientationState,
    events: OrientationEventBus,
    last_face: Arc<Mutex<Option<FaceDirection>>>,
}

impl RotationSink {
    /// Create a sink feeding the given state and bus.
    pub fn new(state: SharedOrientationState, events: OrientationEventBus) -> Self {
        Self { state, events, last_face: Arc::new(Mutex::new(None)) }
    }

    /// Ingest one raw reading.
    ///
    /// Unknown readings and unclassifiable angles are ignored — expected
    /// transient sensor noise, not errors. Flat readings never become the
    /// device orientation; they fold to the last stable one and only the
    /// face-direction extension changes. Any stable reading clears the
    /// recorded face, so repeated flat episodes each notify.
    pub fn push(&self, rotation: RawRotation) {
        match rotation {
            RawRotation::Unknown => {},
            RawRotation::Degrees(angle) => {
                let Some(orientation) = classify(angle) else {
                    // Boundary noise between bands.
                    return;
                };
                let orientation_changed = self.state.update_device_if_changed(orientation);
                let face_cleared = self.set_face(None);
                // An event fires iff the (orientation, face) pair actually
                // changed; picking the device up out of a flat state is
                // one such transition.
                if orientation_changed || face_cleared {
                    self.events.emit_device_change(orientation, None);
                }
            },
            RawRotation::Flat(face) => {
                if self.set_face(Some(face)) {
                    let stable = self.state.device_orientation();
                    self.events.emit_device_change(stable, Some(face));
                }
            },
        }
    }

    /// Record the face direction; returns `true` if it changed.
    fn set_face(&self, face: Option<FaceDirection>) -> bool {
        let mut last = self.last_face.lock().unwrap_or_else(PoisonError::into_inner);
        if *last == face {
            return false;
        }
        *last = face;
        true
    }
}

/// Tracks the raw device rotation signal while started.
#[derive(Debug)]
pub struct DeviceOrientationTracker<S: RotationSignalSource> {
    source: S,
    sink: RotationSink,
    tracking: bool,
}

impl<S: RotationSignalSource> DeviceOrientationTracker<S> {
    /// Create a stopped tracker over the given signal source.
    pub fn new(source: S, state: SharedOrientationState, events: OrientationEventBus) -> Self {
        Self { source, sink: RotationSink::new(state, events), tracking: false }
    }

    /// Subscribe to the hardware signal. No-op when already started.
    pub fn start_tracking(&mut self) {
        if self.tracking {
            return;
        }
        match self.source.start(self.sink.clone()) {
            Ok(()) => self.tracking = true,
            Err(err) => {
                tracing::warn!(%err, "could not start rotation tracking");
            },
        }
    }

    /// Tear the hardware subscription down. No-op when already stopped.
    ///
    /// Synchronous guarantee: once this returns, no further
    /// device-orientation-changed notifications fire, regardless of
    /// underlying hardware activity.
    pub fn stop_tracking(&mut self) {
        if !self.tracking {
            return;
        }
        self.source.stop();
        self.tracking = false;
    }

    /// Whether the tracker is currently subscribed.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }
}

impl<S: RotationSignalSource> Drop for DeviceOrientationTracker<S> {
    /// Disposal must not leak a live hardware subscription.
    fn drop(&mut self) {
        self.stop_tracking();
    }
}

#[cfg(test)]
mod tests {
    use tiltlock_core::Orientation;

    use super::*;

    fn sink_with_bus() -> (RotationSink, SharedOrientationState, OrientationEventBus) {
        let state = SharedOrientationState::default();
        let events = OrientationEventBus::new();
        (RotationSink::new(state.clone(), events.clone()), state, events)
    }

    #[test]
    fn identical_readings_produce_one_event() {
        let (sink, _state, events) = sink_with_bus();
        let mut subscription = events.device_events();

        sink.push(RawRotation::Degrees(90));
        sink.push(RawRotation::Degrees(90));
        sink.push(RawRotation::Degrees(100));

        assert_eq!(
            subscription.try_recv().map(|e| e.orientation),
            Some(Orientation::LandscapeRight)
        );
        // 100 degrees is the same band as 90; the repeat and the same-band
        // reading are both debounced.
        assert!(subscription.try_recv().is_none());
    }

    #[test]
    fn unknown_and_boundary_noise_are_ignored() {
        let (sink, state, events) = sink_with_bus();
        let mut subscription = events.device_events();

        sink.push(RawRotation::Unknown);
        sink.push(RawRotation::Degrees(-1));
        sink.push(RawRotation::Degrees(400));

        assert_eq!(state.device_orientation(), Orientation::Portrait);
        assert!(subscription.try_recv().is_none());
    }

    #[test]
    fn flat_reading_folds_to_last_stable_orientation() {
        let (sink, state, events) = sink_with_bus();
        let mut subscription = events.device_events();

        sink.push(RawRotation::Degrees(90));
        let _ = subscription.try_recv();

        sink.push(RawRotation::Flat(FaceDirection::Up));
        let event = subscription.try_recv();
        assert_eq!(
            event.map(|e| (e.orientation, e.face_direction)),
            Some((Orientation::LandscapeRight, Some(FaceDirection::Up)))
        );
        // Device orientation itself stays at the last stable reading.
        assert_eq!(state.device_orientation(), Orientation::LandscapeRight);

        // Identical flat readings are debounced too.
        sink.push(RawRotation::Flat(FaceDirection::Up));
        assert!(subscription.try_recv().is_none());

        sink.push(RawRotation::Flat(FaceDirection::Down));
        assert!(subscription.try_recv().is_some());
    }

    #[test]
    fn picking_up_from_flat_clears_the_face() {
        let (sink, _state, events) = sink_with_bus();
        let mut subscription = events.device_events();

        sink.push(RawRotation::Flat(FaceDirection::Up));
        let _ = subscription.try_recv();

        // Device picked back up into the same orientation band: the face
        // clears as one transition of the (orientation, face) pair.
        sink.push(RawRotation::Degrees(10));
        let event = subscription.try_recv();
        assert_eq!(
            event.map(|e| (e.orientation, e.face_direction)),
            Some((Orientation::Portrait, None))
        );

        // Same band again with no face recorded: nothing to report.
        sink.push(RawRotation::Degrees(15));
        assert!(subscription.try_recv().is_none());
    }

    #[test]
    fn repeated_flat_episodes_each_notify() {
        let (sink, _state, events) = sink_with_bus();
        let mut subscription = events.device_events();

        sink.push(RawRotation::Flat(FaceDirection::Up));
        assert_eq!(
            subscription.try_recv().map(|e| e.face_direction),
            Some(Some(FaceDirection::Up))
        );

        // Picked up, laid flat again: the second episode is a genuine
        // re-entry, not a debounced repeat.
        sink.push(RawRotation::Degrees(10));
        let _ = subscription.try_recv();
        sink.push(RawRotation::Flat(FaceDirection::Up));
        assert_eq!(
            subscription.try_recv().map(|e| (e.orientation, e.face_direction)),
            Some((Orientation::Portrait, Some(FaceDirection::Up)))
        );
    }

    #[test]
    fn rotating_out_of_flat_reports_one_event() {
        let (sink, _state, events) = sink_with_bus();
        let mut subscription = events.device_events();

        sink.push(RawRotation::Flat(FaceDirection::Up));
        let _ = subscription.try_recv();

        // Orientation change and face clear land in a single event.
        sink.push(RawRotation::Degrees(90));
        let event = subscription.try_recv();
        assert_eq!(
            event.map(|e| (e.orientation, e.face_direction)),
            Some((Orientation::LandscapeRight, None))
        );
        assert!(subscription.try_recv().is_none());
    }
}
