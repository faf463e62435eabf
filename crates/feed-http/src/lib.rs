//! # feed-http
//!
//! Infrastructure layer: the reqwest-backed implementation of the
//! `ApiGateway` port defined in feed-core.

mod error;
mod gateway;

pub use gateway::HttpGateway;
