//! UserRef - a referenced (not owned) user

use crate::value_objects::{EntityId, UserRole};

/// Lightweight reference to a user, as embedded in posts and comments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: EntityId,
    pub username: String,
    pub role: UserRole,
    /// Relative or absolute media path; resolution to an absolute URL is
    /// the presentation layer's job via `MediaUrlResolver`.
    pub avatar: Option<String>,
}

impl UserRef {
    /// Create a new UserRef
    pub fn new(id: EntityId, username: impl Into<String>, role: UserRole) -> Self {
        Self {
            id,
            username: username.into(),
            role,
            avatar: None,
        }
    }
}
