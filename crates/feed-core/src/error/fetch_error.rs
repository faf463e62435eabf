//! FetchError - gateway contract failure

use thiserror::Error;

/// Failure of a gateway call
///
/// `Status` keeps the raw response body so callers can parse structured
/// server error payloads (e.g. `{"detail": "Not allowed."}`) themselves.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    /// Connection, DNS or timeout failure before/while talking to the server
    #[error("transport error: {0}")]
    Transport(String),

    /// A 2xx response body that was not valid JSON
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status of the failure, when the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, when the server produced one
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}
