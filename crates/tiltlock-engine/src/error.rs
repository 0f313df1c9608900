//! Error types for the platform boundary.
//!
//! Gateway errors never reach the application surface: lock intent is
//! recorded regardless of whether the platform accepted the request, and
//! capability probe failures substitute documented defaults. These types
//! exist so degradations are logged with a reason instead of vanishing.

use thiserror::Error;

/// Errors raised at the platform rotation boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No window, scene, or activity is attached; the request cannot be
    /// applied yet. State still updates — the intent is durable.
    #[error("no active window to apply orientation change")]
    NoWindow,

    /// The platform declined the rotation request.
    #[error("rotation request rejected by platform: {0}")]
    Rejected(String),

    /// A capability probe (auto-rotate setting, sensor availability)
    /// could not be answered.
    #[error("capability probe failed: {0}")]
    Probe(String),
}

impl GatewayError {
    /// Whether a later retry or window attach could make this request
    /// succeed without any caller-side change.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::NoWindow)
    }
}
