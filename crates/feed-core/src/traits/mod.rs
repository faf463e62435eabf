//! Collaborator traits (ports) - the interfaces the core consumes
//!
//! The domain layer defines what it needs from the outside world; the
//! infrastructure layer (`feed-http`) provides the implementation.

mod gateway;

pub use gateway::{ApiGateway, FormField, FormValue, GatewayResult, MediaUrlResolver};
