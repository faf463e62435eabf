//! Reaction normalization
//!
//! The backend's reaction vocabulary has drifted across deployments: old
//! rows carry codes like `einstein` or `davinci` while newer ones use the
//! current UI names. This module owns the alias table that folds every
//! generation of codes into the fixed set of user-facing categories, and
//! the aggregation that derives a per-post [`ReactionState`] from whatever
//! shape the server returned.

mod state;
mod vocabulary;

pub use state::ReactionState;
pub use vocabulary::{ReactionKind, ReactionVocabulary};
