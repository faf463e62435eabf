//! Request payloads
//!
//! Serialized bodies for mutations, with local validation mirroring the
//! server-side field limits.

use serde::Serialize;
use validator::Validate;

/// Submit or replace the viewer's reaction on a post
#[derive(Debug, Clone, Serialize)]
pub struct ReactRequest {
    /// Raw backend code, already resolved through the alias table
    #[serde(rename = "type")]
    pub code: String,
}

/// Create a comment (root when `parent` is None)
///
/// `parent: null` is serialized explicitly; the backend treats a missing
/// field and null the same way, but the historical client always sent it.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateCommentRequest {
    pub post: i64,
    pub parent: Option<i64>,
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,
}

/// Create a feed post
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 2000, message = "Post must be 1-2000 characters"))]
    pub content: String,
}
