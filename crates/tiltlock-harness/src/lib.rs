//! Deterministic simulation harness for the Tiltlock engine.
//!
//! In-memory implementations of the platform traits so the exact engine
//! code that runs against real platform bindings can be driven, observed,
//! and failure-injected from tests:
//!
//! - [`SimGateway`]: records every rotation request, answers capability
//!   probes from a script, and can fail on demand
//! - [`SimRotationSource`] / [`SimSignalFeed`]: a hand-cranked rotation
//!   signal honoring the physical-teardown contract
//! - [`script`]: seeded random angle sequences for chaos-style tests
//! - [`invariants`]: assertions for the reconciliation invariant

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod invariants;
pub mod script;
mod sim_gateway;
mod sim_source;

pub use sim_gateway::{AutoRotateProbe, RequestLog, SimGateway};
pub use sim_source::{SimRotationSource, SimSignalFeed};
