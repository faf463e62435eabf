//! Reaction vocabulary - canonical categories and their backend aliases
//!
//! The vocabulary is a static, data-driven alias table with a precomputed
//! reverse index. It is built once at process start and never mutated.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Canonical, user-facing reaction category
///
/// Variant order is display order; it is also the tie-break order if two
/// alias sets ever claim the same backend code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReactionKind {
    Darwin,
    Tesla,
    Mandela,
}

impl ReactionKind {
    /// All categories in display order
    pub const ALL: [ReactionKind; 3] = [Self::Darwin, Self::Tesla, Self::Mandela];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Darwin => "Darwin",
            Self::Tesla => "Tesla",
            Self::Mandela => "Mandela",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Alias table mapping backend reaction codes onto canonical categories
///
/// Each category owns a non-empty, ordered set of backend codes; the first
/// entry is the preferred code for new submissions. Alias sets are
/// pairwise disjoint by construction of [`ReactionVocabulary::standard`].
pub struct ReactionVocabulary {
    entries: Vec<(ReactionKind, &'static [&'static str])>,
    reverse: HashMap<&'static str, ReactionKind>,
}

/// The vocabulary currently deployed: old backend enums (`einstein`,
/// `shakespeare`, `davinci`) fold into the new UI buckets.
static STANDARD: LazyLock<ReactionVocabulary> = LazyLock::new(|| {
    ReactionVocabulary::new(&[
        (ReactionKind::Darwin, &["darwin", "einstein", "shakespeare"]),
        (ReactionKind::Tesla, &["tesla", "davinci"]),
        (ReactionKind::Mandela, &["mandela"]),
    ])
});

impl ReactionVocabulary {
    /// Build a vocabulary from (category, alias set) pairs
    ///
    /// If an alias appears under more than one category, the category
    /// listed first keeps it.
    pub fn new(entries: &[(ReactionKind, &'static [&'static str])]) -> Self {
        let mut reverse = HashMap::new();
        for (kind, aliases) in entries {
            for alias in *aliases {
                reverse.entry(*alias).or_insert(*kind);
            }
        }
        Self {
            entries: entries.to_vec(),
            reverse,
        }
    }

    /// The process-wide standard vocabulary
    pub fn standard() -> &'static ReactionVocabulary {
        &STANDARD
    }

    /// Resolve a raw backend code to its canonical category
    ///
    /// `None` signals a code outside the vocabulary; aggregation ignores
    /// such codes instead of failing, since they usually mean the backend
    /// is newer than this client.
    pub fn kind_of(&self, code: &str) -> Option<ReactionKind> {
        self.reverse.get(code).copied()
    }

    /// Ordered alias set for a category
    pub fn aliases(&self, kind: ReactionKind) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(&[], |(_, aliases)| aliases)
    }

    /// The preferred code to submit for a category (first alias)
    pub fn default_code(&self, kind: ReactionKind) -> &'static str {
        self.aliases(kind).first().copied().unwrap_or("")
    }

    /// Categories in display order
    pub fn kinds(&self) -> impl Iterator<Item = ReactionKind> + '_ {
        self.entries.iter().map(|(kind, _)| *kind)
    }
}

impl fmt::Debug for ReactionVocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactionVocabulary")
            .field("entries", &self.entries)
            .finish()
    }
}
