// File: src/core/types.rs
use serde::{Deserialize, Serialize};

/// Index of a node inside the trie's arena.
pub type NodeId = usize;

/// How a suggestion matched the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// The suggestion is an exact continuation of the query prefix.
    Prefix,
    /// The suggestion was found by n-gram similarity.
    Fuzzy,
}

/// A single ranked suggestion. Output-only; never stored in the indexes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub word: String,
    pub match_type: MatchType,
    /// Occurrence count for prefix matches, Jaccard similarity for fuzzy ones.
    pub score: f64,
}

/// Tuning parameters for the engine. Every constant of the ranking policy
/// lives here rather than being hardcoded at the call sites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of suggestions returned per query.
    pub top_k: usize,
    /// Length of the character n-grams used by the fuzzy index.
    pub ngram_size: usize,
    /// Fuzzy candidates with similarity at or below this are discarded.
    pub similarity_threshold: f64,
    /// Fuzzy lookups ask for this multiple of the remaining slots, to
    /// absorb candidates that duplicate a prefix match.
    pub fuzzy_oversample: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: 7,
            ngram_size: 2,
            similarity_threshold: 0.2,
            fuzzy_oversample: 2,
        }
    }
}
