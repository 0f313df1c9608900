//! Orientation state reconciliation engine for Tiltlock
//!
//! Reconciles three competing inputs — application lock requests, the raw
//! device rotation signal, and the platform's interface-rotation subsystem
//! — into one consistent, observable orientation, and fans state
//! transitions out to application listeners over two independent event
//! channels.
//!
//! # Components
//!
//! - [`OrientationController`]: validates lock requests, drives the
//!   platform gateway, owns the lock half of the state
//! - [`DeviceOrientationTracker`]: subscribes to the raw rotation signal,
//!   classifies and debounces it, owns the device half of the state
//! - [`OrientationEventBus`]: the two-channel notification broker
//! - [`RotationGateway`] / [`RotationSignalSource`]: traits for
//!   platform-specific I/O, selected at composition time
//! - [`OrientationService`]: the application-facing facade wiring the
//!   above together

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod controller;
mod error;
mod events;
mod gateway;
mod service;
mod tracker;

pub use config::BootOrientation;
pub use controller::OrientationController;
pub use error::GatewayError;
pub use events::{
    DeviceOrientationChanged, DeviceOrientationEvents, EventSubscription, LockStateChanged,
    LockStateEvents, OrientationEventBus,
};
pub use gateway::{AutoRotateStatus, RotationGateway, RotationSignalSource};
pub use service::OrientationService;
pub use tracker::{DeviceOrientationTracker, RotationSink};
