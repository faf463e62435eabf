//! ReactionState - per-post aggregation of reaction data
//!
//! Derived fresh from every server payload; never mutated in place. The
//! client view of reactions is a pure function of the last fetched post.

use std::collections::{BTreeMap, BTreeSet};

use crate::entities::Post;

use super::vocabulary::{ReactionKind, ReactionVocabulary};

/// Pseudo-key the backend count serializer appends alongside real codes.
const TOTAL_KEY: &str = "total";

/// Normalized per-post reaction state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReactionState {
    counts: BTreeMap<ReactionKind, u64>,
    viewer_kind: Option<ReactionKind>,
    supported_codes: BTreeSet<String>,
}

impl ReactionState {
    /// Aggregate a post's reaction data into a normalized state
    ///
    /// Prefers the pre-aggregated counts map when present (even if every
    /// entry is zero); falls back to folding the raw reaction list. Codes
    /// outside the vocabulary are dropped silently; they represent
    /// forward/backward vocabulary skew, not an error.
    pub fn of_post(vocab: &ReactionVocabulary, post: &Post) -> Self {
        let mut counts: BTreeMap<ReactionKind, u64> = vocab.kinds().map(|k| (k, 0)).collect();
        let mut supported_codes = BTreeSet::new();

        if post.reaction_counts.is_empty() {
            for record in &post.reactions {
                supported_codes.insert(record.code.clone());
                if let Some(kind) = vocab.kind_of(&record.code) {
                    if let Some(slot) = counts.get_mut(&kind) {
                        *slot += 1;
                    }
                }
            }
        } else {
            for (code, n) in &post.reaction_counts {
                if code == TOTAL_KEY {
                    continue;
                }
                supported_codes.insert(code.clone());
                if let Some(kind) = vocab.kind_of(code) {
                    if let Some(slot) = counts.get_mut(&kind) {
                        *slot += (*n).max(0) as u64;
                    }
                }
            }
        }

        // The explicit field wins when present, even if its code no longer
        // resolves; the raw-list scan is only for older payloads that
        // ship `me_id` instead.
        let viewer_kind = if let Some(code) = post.my_reaction.as_deref() {
            vocab.kind_of(code)
        } else {
            post.me_id.and_then(|me| {
                post.reactions
                    .iter()
                    .find(|r| r.holder == me)
                    .and_then(|r| vocab.kind_of(&r.code))
            })
        };

        Self {
            counts,
            viewer_kind,
            supported_codes,
        }
    }

    /// Count for one category (zero if absent)
    pub fn count(&self, kind: ReactionKind) -> u64 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Counts for every category, in display order
    pub fn counts(&self) -> &BTreeMap<ReactionKind, u64> {
        &self.counts
    }

    /// Sum of all resolved reaction counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The viewer's own category, if any
    pub fn viewer_kind(&self) -> Option<ReactionKind> {
        self.viewer_kind
    }

    /// Whether the viewer currently holds this category
    pub fn viewer_holds(&self, kind: ReactionKind) -> bool {
        self.viewer_kind == Some(kind)
    }

    /// Raw backend codes observed in the source payload
    pub fn supported_codes(&self) -> &BTreeSet<String> {
        &self.supported_codes
    }

    /// Whether a raw code was observed on this post
    pub fn supports(&self, code: &str) -> bool {
        self.supported_codes.contains(code)
    }
}
