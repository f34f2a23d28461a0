//! View state for account activation.

use api::ApiResult;

use crate::core::navigation::{Destination, Navigator};
use crate::core::status::{OperationStatus, StatusFlag};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationState {
    /// Key from the activation link, forwarded verbatim.
    pub key: String,
    status: OperationStatus,
}

impl ActivationState {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            status: OperationStatus::default(),
        }
    }

    /// Mark the activation call as issued. Returns the key to send, or `None`
    /// when a call is already outstanding.
    pub fn begin(&mut self) -> Option<String> {
        self.status.begin().then(|| self.key.clone())
    }

    pub fn complete(&mut self, outcome: ApiResult<()>) {
        if let Err(err) = &outcome {
            tracing::warn!(%err, "account activation failed");
        }
        self.status.settle(&outcome);
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
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
