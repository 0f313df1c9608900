//! Chaos tests: seeded noisy rotation streams against a reference model.
//!
//! The oracle recomputes the expected transition sequence from the same
//! script with the pure classifier, then checks the engine reported
//! exactly those transitions and nothing else.

use tiltlock_core::{Orientation, classify};
use tiltlock_engine::{BootOrientation, OrientationService};
use tiltlock_harness::{SimGateway, SimRotationSource, invariants, script};

/// Expected device-orientation transitions for an angle script, starting
/// from portrait.
fn expected_transitions(angles: &[i32]) -> Vec<Orientation> {
    let mut last = Orientation::Portrait;
    let mut transitions = Vec::new();
    for &angle in angles {
        if let Some(orientation) = classify(angle)
            && orientation != last
        {
            last = orientation;
            transitions.push(orientation);
        }
    }
    transitions
}

#[test]
fn noisy_streams_report_exactly_the_model_transitions() {
    for seed in 0..16u64 {
        let angles = script::angles(seed, 256);

        let (source, feed) = SimRotationSource::new();
        let mut service =
            OrientationService::new(SimGateway::new(), source, BootOrientation::Unspecified);
        service.start_orientation_tracking();
        let mut subscription = service.on_orientation_change();

        let mut observed = Vec::new();
        for &angle in &angles {
            feed.angle(angle);
            while let Some(event) = subscription.try_recv() {
                observed.push(event.orientation);
            }
            invariants::assert_reconciled(
                &service.state_snapshot(),
                &format!("seed {seed}, angle {angle}"),
            );
        }

        assert_eq!(observed, expected_transitions(&angles), "seed {seed}");
    }
}

#[test]
fn unknown_sentinels_change_nothing() {
    for seed in 16..24u64 {
        let readings = script::readings(seed, 256);

        let (source, feed) = SimRotationSource::new();
        let mut service =
            OrientationService::new(SimGateway::new(), source, BootOrientation::Unspecified);
        service.start_orientation_tracking();

        for &reading in &readings {
            let before = service.state_snapshot();
            let delivered = feed.emit(reading);
            assert!(delivered, "seed {seed}: live subscription dropped a reading");

            let after = service.state_snapshot();
            if matches!(reading, tiltlock_core::RawRotation::Unknown) {
                assert_eq!(before, after, "seed {seed}: unknown sentinel mutated state");
            }
            invariants::assert_stable(&after, &format!("seed {seed}"));
        }
    }
}
