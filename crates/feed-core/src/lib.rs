//! # feed-core
//!
//! Domain layer for the social-feed client: entities, value objects, the
//! reaction vocabulary and aggregator, and the collaborator traits the
//! infrastructure layer implements. This crate has zero dependencies on
//! transport (HTTP client, runtime configuration, etc.).

pub mod entities;
pub mod error;
pub mod reactions;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, Post, PostImage, ReactionRecord, UserRef, flatten_thread, roots, visit_thread,
    MAX_REPLY_DEPTH,
};
pub use error::FetchError;
pub use reactions::{ReactionKind, ReactionState, ReactionVocabulary};
pub use traits::{ApiGateway, FormField, FormValue, GatewayResult, MediaUrlResolver};
pub use value_objects::{EntityId, EntityIdParseError, UserRole};
