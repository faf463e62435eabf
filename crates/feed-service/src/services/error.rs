//! Service layer error types

use thiserror::Error;

use feed_core::{EntityId, FetchError};

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Gateway call failed; surfaced unchanged, never retried here
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Local validation failure; never reaches the network
    #[error("validation error: {0}")]
    Validation(String),

    /// A 2xx response that did not match the expected payload shape
    #[error("unexpected response payload: {0}")]
    Decode(String),

    /// A toggle for this post is already in flight
    #[error("a reaction request for post {post} is already in flight")]
    RequestInFlight { post: EntityId },
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Whether this error came from the gateway
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }

    /// Whether this error is a local validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
