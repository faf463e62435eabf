//! Data-fetch gateway and media URL resolver contracts

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, FetchError>;

/// One field of a multipart form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: FormValue,
}

/// The value side of a form field: plain text or a file upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File { filename: String, bytes: Vec<u8> },
}

impl FormField {
    /// Plain text field
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FormValue::Text(value.into()),
        }
    }

    /// File field
    pub fn file(name: impl Into<String>, filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            value: FormValue::File {
                filename: filename.into(),
                bytes,
            },
        }
    }
}

/// Data-fetch gateway to the remote API
///
/// Paths are relative to the configured API base (e.g. `posts/1/react/`).
/// Every call resolves to parsed JSON on a 2xx response and fails with
/// [`FetchError`] otherwise; the raw response body is preserved in the
/// error for caller-side parsing of structured server error codes.
/// Transport, authentication headers and retry policy (there is none) are
/// the implementation's concern.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    /// GET a resource
    async fn get(&self, path: &str) -> GatewayResult<Value>;

    /// POST a JSON body
    async fn post(&self, path: &str, body: &Value) -> GatewayResult<Value>;

    /// POST a multipart form (file uploads)
    async fn post_form(&self, path: &str, fields: &[FormField]) -> GatewayResult<Value>;

    /// DELETE a resource; `None` when the server replies with no content
    async fn delete(&self, path: &str) -> GatewayResult<Option<Value>>;
}

/// Resolves server-relative media paths (avatars, post images) into
/// absolute URLs. Used by presentation, not by the core algorithms.
pub trait MediaUrlResolver: Send + Sync {
    fn resolve(&self, path: &str) -> String;
}
