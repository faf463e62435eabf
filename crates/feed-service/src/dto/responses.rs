//! Response payloads
//!
//! Shapes are permissive on purpose: the backend has shipped several
//! generations of these objects, and a missing or extra field must never
//! fail a whole listing. Only fields the client cannot work without are
//! required.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// A user as embedded in posts, comments and reactions
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// The `user` field of a reaction row: an id on old payloads, a nested
/// object on newer ones
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserField {
    Id(i64),
    Object(UserPayload),
}

impl UserField {
    /// The user id regardless of representation
    pub fn id(&self) -> i64 {
        match self {
            Self::Id(id) => *id,
            Self::Object(user) => user.id,
        }
    }
}

/// A raw reaction row
#[derive(Debug, Clone, Deserialize)]
pub struct ReactionPayload {
    #[serde(default)]
    pub id: Option<i64>,
    pub user: UserField,
    #[serde(rename = "type")]
    pub code: String,
}

/// An image attached to a post
#[derive(Debug, Clone, Deserialize)]
pub struct PostImagePayload {
    pub id: i64,
    pub image: String,
}

/// A feed post
#[derive(Debug, Clone, Deserialize)]
pub struct PostPayload {
    pub id: i64,
    pub author: UserPayload,
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub images: Vec<PostImagePayload>,
    #[serde(default)]
    pub reactions: Vec<ReactionPayload>,
    #[serde(default)]
    pub reaction_counts: HashMap<String, i64>,
    #[serde(default)]
    pub my_reaction: Option<String>,
    #[serde(default)]
    pub me_id: Option<i64>,
}

/// A comment node; `replies` arrive already nested
#[derive(Debug, Clone, Deserialize)]
pub struct CommentPayload {
    pub id: i64,
    pub post: i64,
    pub author: UserPayload,
    #[serde(default)]
    pub parent: Option<i64>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub replies: Vec<CommentPayload>,
}

/// A listing that is either a bare array or a paginated envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Paginated { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> ListPayload<T> {
    /// The items, regardless of envelope
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paginated { results } => results,
            Self::Plain(items) => items,
        }
    }
}
