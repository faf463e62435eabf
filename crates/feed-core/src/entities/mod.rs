//! Domain entities
//!
//! Clean in-memory representations of what the backend serves. Wire
//! payloads live in the application layer and are mapped into these.

mod comment;
mod post;
mod user;

pub use comment::{flatten_thread, roots, visit_thread, Comment, MAX_REPLY_DEPTH};
pub use post::{Post, PostImage, ReactionRecord};
pub use user::UserRef;
