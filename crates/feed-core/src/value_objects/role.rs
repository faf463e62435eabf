//! UserRole - the account roles the backend distinguishes

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Account role as reported by the backend
///
/// Teachers act as moderators across the feed (they may delete any comment
/// or post). Roles the client does not recognize deserialize as `Other`
/// so a vocabulary skew never fails a whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Teacher,
    Parent,
    Other,
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&raw))
    }
}

impl UserRole {
    /// Whether this role carries moderator privileges
    #[inline]
    pub fn is_moderator(&self) -> bool {
        matches!(self, Self::Teacher)
    }

    /// Parse a raw role string, mapping unknown values to `Other`
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "student" => Self::Student,
            "teacher" => Self::Teacher,
            "parent" => Self::Parent,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Parent => "parent",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}
