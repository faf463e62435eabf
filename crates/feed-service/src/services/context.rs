//! Service context - dependency container for services
//!
//! Holds the gateway, the signed-in viewer, and the per-post in-flight
//! registry that serializes same-post reaction toggles.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use feed_core::{ApiGateway, EntityId, UserRole};

/// The signed-in user, as far as the services need to know them
///
/// Used for local permission hints (`CommentService::can_delete`) and
/// nothing else; the server remains the authority on every action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub id: EntityId,
    pub role: UserRole,
}

impl Viewer {
    /// Create a new Viewer
    pub fn new(id: EntityId, role: UserRole) -> Self {
        Self { id, role }
    }
}

/// Dependency container passed to all services
#[derive(Clone)]
pub struct ServiceContext {
    gateway: Arc<dyn ApiGateway>,
    viewer: Option<Viewer>,
    inflight: Arc<DashMap<EntityId, ()>>,
}

impl ServiceContext {
    /// Create a context around a gateway, with no signed-in viewer
    pub fn new(gateway: Arc<dyn ApiGateway>) -> Self {
        Self {
            gateway,
            viewer: None,
            inflight: Arc::new(DashMap::new()),
        }
    }

    /// Attach the signed-in viewer
    pub fn with_viewer(mut self, viewer: Viewer) -> Self {
        self.viewer = Some(viewer);
        self
    }

    /// Get the data-fetch gateway
    pub fn gateway(&self) -> &dyn ApiGateway {
        self.gateway.as_ref()
    }

    /// Get the signed-in viewer, if any
    pub fn viewer(&self) -> Option<&Viewer> {
        self.viewer.as_ref()
    }

    /// Mark a post as having a toggle in flight
    ///
    /// Returns `None` while another toggle for the same post holds the
    /// slot. The returned guard releases the slot on drop, success or
    /// failure alike. Toggles on different posts are independent.
    pub fn begin_toggle(&self, post: EntityId) -> Option<InFlightGuard> {
        match self.inflight.entry(post) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                slot.insert(());
                Some(InFlightGuard {
                    inflight: Arc::clone(&self.inflight),
                    post,
                })
            }
        }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("gateway", &"dyn ApiGateway")
            .field("viewer", &self.viewer)
            .field("inflight", &self.inflight.len())
            .finish()
    }
}

/// RAII guard for a post's in-flight toggle slot
#[must_use = "dropping the guard immediately releases the in-flight slot"]
pub struct InFlightGuard {
    inflight: Arc<DashMap<EntityId, ()>>,
    post: EntityId,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.inflight.remove(&self.post);
    }
}
