//! Wire DTOs
//!
//! Deserializable payloads mirroring what the backend actually sends,
//! kept separate from the clean domain entities in feed-core. Mappers
//! convert payloads into entities.

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateCommentRequest, CreatePostRequest, ReactRequest};
pub use responses::{
    CommentPayload, ListPayload, PostImagePayload, PostPayload, ReactionPayload, UserField,
    UserPayload,
};
