//! Application services
//!
//! Each service borrows the shared [`ServiceContext`] and exposes the
//! operations one part of the UI needs. State is never mutated in place:
//! every mutation re-derives the client view from a fresh server response.

pub mod comment;
pub mod context;
pub mod error;
pub mod post;
pub mod reaction;

// Re-export all services for convenience
pub use comment::CommentService;
pub use context::{InFlightGuard, ServiceContext, Viewer};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use reaction::{ReactionService, ToggleAction, ToggleOutcome};
