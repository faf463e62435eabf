//! # feed-service
//!
//! Application layer: wire DTOs and the services that drive reaction
//! toggling, comment threads, and the post feed against the gateway.

pub mod dto;
pub mod services;

pub use services::{
    CommentService, InFlightGuard, PostService, ReactionService, ServiceContext, ServiceError,
    ServiceResult, ToggleAction, ToggleOutcome, Viewer,
};
