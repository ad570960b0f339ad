//! Outcome classification for remote protocol calls.
//!
//! Every constructed response carries a [`CallResult`] describing how the
//! remote operation fared. The result is attached by whichever collaborator
//! observed the outcome: the codec attaches [`CallResult::ok`] after a
//! successful parse, while the transport layer supplies a failing result when
//! the call timed out or the channel broke. "No result" is never a valid
//! state for a response.

use serde::Serialize;

/// Classification of a remote call outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CallOutcome {
    /// The operation produced a usable response.
    Ok,
    /// No response arrived within the caller's deadline.
    Timeout,
    /// The underlying channel failed before a response arrived.
    TransportFailure,
    /// A response arrived but could not be decoded.
    FormatError,
    /// The remote side reported a fault.
    ServerFault,
    /// The outcome could not be determined.
    Unknown,
}

/// Immutable description of a remote call outcome.
///
/// Created once via one of the factory methods and attached to exactly one
/// message instance. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CallResult {
    outcome: CallOutcome,
    description: Option<String>,
}

impl CallResult {
    fn new(outcome: CallOutcome, description: Option<String>) -> Self {
        Self {
            outcome,
            description,
        }
    }

    /// The operation produced a usable response.
    #[must_use]
    pub fn ok() -> Self { Self::new(CallOutcome::Ok, None) }

    /// The call deadline elapsed without a response.
    #[must_use]
    pub fn timeout() -> Self { Self::new(CallOutcome::Timeout, None) }

    /// The channel failed before a response arrived.
    #[must_use]
    pub fn transport_failure(description: impl Into<String>) -> Self {
        Self::new(CallOutcome::TransportFailure, Some(description.into()))
    }

    /// A response arrived but could not be decoded.
    #[must_use]
    pub fn format_error(description: impl Into<String>) -> Self {
        Self::new(CallOutcome::FormatError, Some(description.into()))
    }

    /// The remote side reported a fault.
    #[must_use]
    pub fn server_fault(description: impl Into<String>) -> Self {
        Self::new(CallOutcome::ServerFault, Some(description.into()))
    }

    /// The outcome could not be determined.
    #[must_use]
    pub fn unknown() -> Self { Self::new(CallOutcome::Unknown, None) }

    /// Outcome classification.
    #[inline]
    #[must_use]
    pub fn outcome(&self) -> CallOutcome { self.outcome }

    /// Optional human-readable description of the outcome.
    #[inline]
    #[must_use]
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }

    /// `true` iff the operation produced a usable response.
    #[inline]
    #[must_use]
    pub fn is_ok(&self) -> bool { self.outcome == CallOutcome::Ok }
}
