//! Outcome tracking for views that trigger a single asynchronous account
//! operation (activation, password-reset completion).
//!
//! ```text
//! Idle ──begin──▶ Pending ──settle(Ok)──▶ Success
//!                    │                      │
//!                    └──settle(Err)──▶ Failure
//! Success / Failure ──begin──▶ Pending
//! ```
//!
//! The templates only ever see two markers, `success` and `error`. Because
//! both are derived from a single [`Phase`], at most one of them is set.

use std::fmt;

/// Marker rendered by the templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFlag {
    Ok,
    Error,
}

impl StatusFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for StatusFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Success,
    Failure,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationStatus {
    phase: Phase,
}

impl OperationStatus {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    /// Enter `Pending`. Returns `false` (and changes nothing) when an
    /// operation is already outstanding.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        self.phase = Phase::Pending;
        true
    }

    /// Record the outcome of the outstanding operation. Always leaves `Pending`.
    pub fn settle<T, E>(&mut self, outcome: &Result<T, E>) {
        self.phase = match outcome {
            Ok(_) => Phase::Success,
            Err(_) => Phase::Failure,
        };
    }

    /// Drop a previous failure marker without touching a success marker.
    pub fn clear_error(&mut self) {
        if self.phase == Phase::Failure {
            self.phase = Phase::Idle;
        }
    }

    pub fn success(&self) -> Option<StatusFlag> {
        (self.phase == Phase::Success).then_some(StatusFlag::Ok)
    }

    pub fn error(&self) -> Option<StatusFlag> {
        (self.phase == Phase::Failure).then_some(StatusFlag::Error)
    }
}
