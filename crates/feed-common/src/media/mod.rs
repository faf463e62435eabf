//! Media URL resolution
//!
//! The backend serves avatars and post images as server-relative paths
//! (`/media/avatars/x.png`) or, behind some proxies, as already-absolute
//! URLs. Presentation code always goes through the resolver so it never
//! has to care which form arrived.

use feed_core::MediaUrlResolver;

use crate::config::ApiConfig;

/// Resolver joining relative media paths onto the API origin
#[derive(Debug, Clone)]
pub struct MediaUrls {
    origin: String,
}

impl MediaUrls {
    /// Build a resolver from the API configuration
    pub fn new(api: &ApiConfig) -> Self {
        Self {
            origin: api.origin(),
        }
    }

    /// Build a resolver from a raw origin (no trailing slash expected)
    pub fn from_origin(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }

    fn is_absolute(path: &str) -> bool {
        let lower = path.to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }
}

impl MediaUrlResolver for MediaUrls {
    fn resolve(&self, path: &str) -> String {
        if path.is_empty() || Self::is_absolute(path) {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{path}", self.origin)
        } else {
            format!("{}/{path}", self.origin)
        }
    }
}
