//! View state for completing a password reset.

use api::{ApiResult, KeyAndPassword};

use crate::core::navigation::{Destination, Navigator};
use crate::core::status::{OperationStatus, StatusFlag};

/// What a submit attempt resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Send this request, then call [`ResetFinishState::complete`].
    Ready(KeyAndPassword),
    /// Password and confirmation differ; nothing to send.
    DoNotMatch,
    /// No reset key was supplied with the link; nothing to send.
    KeyMissing,
    /// A previous submission has not settled yet.
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetFinishState {
    key: Option<String>,
    pub password: String,
    pub confirm_password: String,
    do_not_match: Option<StatusFlag>,
    status: OperationStatus,
}

impl ResetFinishState {
    pub fn new(key: Option<String>) -> Self {
        Self {
            key,
            ..Self::default()
        }
    }

    /// Fixed at construction: true iff the link carried no key.
    pub fn key_missing(&self) -> bool {
        self.key.is_none()
    }

    pub fn finish_reset(&mut self) -> Submission {
        if self.status.is_pending() {
            return Submission::Busy;
        }

        self.do_not_match = None;
        self.status.clear_error();

        if self.password != self.confirm_password {
            self.do_not_match = Some(StatusFlag::Error);
            return Submission::DoNotMatch;
        }

        let Some(key) = self.key.clone() else {
            return Submission::KeyMissing;
        };

        self.status.begin();
        Submission::Ready(KeyAndPassword {
            key,
            new_password: self.password.clone(),
        })
    }

    pub fn complete(&mut self, outcome: ApiResult<()>) {
        if let Err(err) = &outcome {
            tracing::warn!(%err, "password reset failed");
        }
        self.status.settle(&outcome);
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    pub fn do_not_match(&self) -> Option<StatusFlag> {
        self.do_not_match
    }

    pub fn success(&self) -> Option<StatusFlag> {
        self.status.success()
    }

    pub fn error(&self) -> Option<StatusFlag> {
        self.status.error()
    }

    pub fn login(&self, navigator: &dyn Navigator) {
        navigator.go(Destination::Login);
    }
}
