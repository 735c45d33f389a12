//! In-memory autocomplete engine.
//!
//! A vocabulary of words is indexed twice: in a prefix trie with per-word
//! occurrence counts, and in a character n-gram inverted index. A query is
//! answered in two phases: exact prefix continuations ranked by frequency,
//! then fuzzy candidates ranked by Jaccard similarity to top up under-filled
//! result sets.

pub mod core;
pub mod fuzzy;

pub use crate::core::engine::{AddWordError, SuggestEngine};
pub use crate::core::types::{MatchType, SearchConfig, SuggestionResult};
