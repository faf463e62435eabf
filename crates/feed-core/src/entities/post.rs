//! Post entity - a feed item and the raw reaction data it carries

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::value_objects::EntityId;

use super::user::UserRef;

/// A single raw reaction row: who reacted, with which backend code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionRecord {
    pub holder: EntityId,
    pub code: String,
}

impl ReactionRecord {
    /// Create a new ReactionRecord
    pub fn new(holder: EntityId, code: impl Into<String>) -> Self {
        Self {
            holder,
            code: code.into(),
        }
    }
}

/// Image attached to a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostImage {
    pub id: EntityId,
    pub image: String,
}

/// Feed post
///
/// Carries both server-side reaction representations: the pre-aggregated
/// `reaction_counts` map (keyed by raw backend code, possibly including a
/// `total` pseudo-key) and the raw `reactions` list. Which one is present
/// depends on the backend generation; `ReactionState::of_post` reconciles
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: EntityId,
    pub author: UserRef,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub images: Vec<PostImage>,
    pub reactions: Vec<ReactionRecord>,
    pub reaction_counts: HashMap<String, i64>,
    /// The viewer's own raw reaction code, when the server includes it
    pub my_reaction: Option<String>,
    /// The viewer's id, used to infer `my_reaction` from the raw list
    /// when the explicit field is absent
    pub me_id: Option<EntityId>,
}
