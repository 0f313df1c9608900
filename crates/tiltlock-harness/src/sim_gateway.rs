//! Simulation gateway implementing [`RotationGateway`].
//!
//! Records every rotation request into a shared log the test keeps a
//! handle to (the gateway itself moves into the controller), and answers
//! the capability probes from a per-test script. Failure injection covers
//! both halves of the boundary: request dispatch and the probe.

use std::sync::{Arc, Mutex, PoisonError};

use tiltlock_core::{Orientation, OrientationMask};
use tiltlock_engine::{AutoRotateStatus, GatewayError, RotationGateway};

/// Shared view of the rotation requests a [`SimGateway`] has received.
#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    inner: Arc<Mutex<Vec<OrientationMask>>>,
}

impl RequestLog {
    /// All requests so far, oldest first.
    pub fn all(&self) -> Vec<OrientationMask> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// The most recent request, if any.
    pub fn last(&self) -> Option<OrientationMask> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).last().copied()
    }

    /// Number of requests so far.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no request has been made yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, mask: OrientationMask) {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).push(mask);
    }
}

/// Scripted answer for the auto-rotate capability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoRotateProbe {
    /// The platform has no answer at all (reported as absence).
    NoAnswer,
    /// The probe itself fails with this reason.
    Fails(String),
    /// The probe answers with this status.
    Answers(AutoRotateStatus),
}

/// Scripted in-memory [`RotationGateway`].
#[derive(Debug)]
pub struct SimGateway {
    requests: RequestLog,
    interface_orientation: Option<Orientation>,
    auto_rotate: AutoRotateProbe,
    upside_down_supported: bool,
    request_failure: Option<GatewayError>,
}

impl Default for SimGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl SimGateway {
    /// A gateway that accepts every request, reports no interface
    /// orientation, has no auto-rotate answer, and cannot render
    /// upside-down portrait.
    pub fn new() -> Self {
        Self {
            requests: RequestLog::default(),
            interface_orientation: None,
            auto_rotate: AutoRotateProbe::NoAnswer,
            upside_down_supported: false,
            request_failure: None,
        }
    }

    /// Script the current interface orientation answer.
    #[must_use]
    pub fn with_interface_orientation(mut self, orientation: Orientation) -> Self {
        self.interface_orientation = Some(orientation);
        self
    }

    /// Script the auto-rotate probe.
    #[must_use]
    pub fn with_auto_rotate(mut self, probe: AutoRotateProbe) -> Self {
        self.auto_rotate = probe;
        self
    }

    /// Make the platform capable of upside-down portrait.
    #[must_use]
    pub fn with_upside_down_support(mut self) -> Self {
        self.upside_down_supported = true;
        self
    }

    /// Fail every rotation request with the given error. Requests are
    /// still recorded so tests can assert the dispatch attempt happened.
    #[must_use]
    pub fn with_request_failure(mut self, error: GatewayError) -> Self {
        self.request_failure = Some(error);
        self
    }

    /// Handle to the request log; keep it before moving the gateway into
    /// the engine.
    pub fn request_log(&self) -> RequestLog {
        self.requests.clone()
    }
}

impl RotationGateway for SimGateway {
    fn request_orientation(&mut self, mask: OrientationMask) -> Result<(), GatewayError> {
        tracing::debug!(?mask, "sim gateway rotation request");
        self.requests.record(mask);
        match &self.request_failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn current_interface_orientation(&self) -> Option<Orientation> {
        self.interface_orientation
    }

    fn auto_rotate_status(&self) -> Result<Option<AutoRotateStatus>, GatewayError> {
        match &self.auto_rotate {
            AutoRotateProbe::NoAnswer => Ok(None),
            AutoRotateProbe::Fails(reason) => Err(GatewayError::Probe(reason.clone())),
            AutoRotateProbe::Answers(status) => Ok(Some(*status)),
        }
    }

    fn supports_upside_down(&self) -> bool {
        self.upside_down_supported
    }
}
