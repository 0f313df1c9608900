//! Fuzz target for the orientation engine state machine
//!
//! # Strategy
//!
//! Arbitrary interleavings of application calls (lock, unlock, tracking
//! control, queries) and sensor-side readings, including garbage direction
//! strings and out-of-range angles.
//!
//! # Invariants
//!
//! - No operation sequence panics
//! - Reconciliation holds after every operation (current == locked when
//!   locked, device otherwise)
//! - Flat states never surface as current, device, or locked orientation
//! - Queries never observe a torn lock flag / locked orientation pair

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tiltlock_core::{FaceDirection, RawRotation};
use tiltlock_engine::{BootOrientation, OrientationService};
use tiltlock_harness::{SimGateway, SimRotationSource, invariants};

#[derive(Debug, Clone, Arbitrary)]
enum FuzzOp {
    LockPortrait { upside_down: bool },
    LockLandscape { direction: String },
    Unlock,
    Angle { degrees: i32 },
    Flat { face_up: bool },
    UnknownReading,
    StartTracking,
    StopTracking,
    Query,
}

#[derive(Debug, Clone, Arbitrary)]
struct FuzzCase {
    boot: u8,
    ops: Vec<FuzzOp>,
}

fn boot_from(byte: u8) -> BootOrientation {
    match byte % 9 {
        0 => BootOrientation::Portrait,
        1 => BootOrientation::ReversePortrait,
        2 => BootOrientation::Landscape,
        3 => BootOrientation::ReverseLandscape,
        4 => BootOrientation::SensorPortrait,
        5 => BootOrientation::SensorLandscape,
        6 => BootOrientation::FullSensor,
        7 => BootOrientation::User,
        _ => BootOrientation::Unspecified,
    }
}

fuzz_target!(|case: FuzzCase| {
    let (source, feed) = SimRotationSource::new();
    let mut service =
        OrientationService::new(SimGateway::new(), source, boot_from(case.boot));
    service.start_orientation_tracking();

    for op in &case.ops {
        match op {
            FuzzOp::LockPortrait { upside_down } => {
                let direction = upside_down.then_some("UPSIDE_DOWN");
                service.lock_to_portrait(direction);
            }
            FuzzOp::LockLandscape { direction } => service.lock_to_landscape(direction),
            FuzzOp::Unlock => service.unlock_all_orientations(),
            FuzzOp::Angle { degrees } => {
                let _ = feed.emit(RawRotation::Degrees(*degrees));
            }
            FuzzOp::Flat { face_up } => {
                let face = if *face_up { FaceDirection::Up } else { FaceDirection::Down };
                let _ = feed.emit(RawRotation::Flat(face));
            }
            FuzzOp::UnknownReading => {
                let _ = feed.emit(RawRotation::Unknown);
            }
            FuzzOp::StartTracking => service.start_orientation_tracking(),
            FuzzOp::StopTracking => service.stop_orientation_tracking(),
            FuzzOp::Query => {
                let _ = service.current_orientation();
                let _ = service.supported_orientation_mask();
                let _ = service.device_auto_rotate_status();
            }
        }

        let snapshot = service.state_snapshot();
        invariants::assert_reconciled(&snapshot, "fuzz step");
        invariants::assert_stable(&snapshot, "fuzz step");
        assert_eq!(snapshot.current(), service.current_orientation());
    }
});
