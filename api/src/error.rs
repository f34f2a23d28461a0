use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure modes of a call against the account backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend rejected the current credentials.
    #[error("not authenticated")]
    Unauthorized,

    /// Any other non-success status.
    #[error("server responded with status {0}")]
    Status(u16),

    /// The body could not be decoded into the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::from_status(status.as_u16())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl ApiError {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            other => Self::Status(other),
        }
    }
}
