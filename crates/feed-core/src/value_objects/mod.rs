//! Value objects - identifiers and enumerations shared across the domain

mod entity_id;
mod role;

pub use entity_id::{EntityId, EntityIdParseError};
pub use role::UserRole;
