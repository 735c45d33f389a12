use std::collections::HashSet;

use log::{debug, trace};
use thiserror::Error;

use crate::core::topk::{ScoredItem, TopKSelector};
use crate::core::trie::PrefixTrie;
use crate::core::types::{MatchType, SearchConfig, SuggestionResult};
use crate::fuzzy::ngram::NgramIndex;

/// Errors from vocabulary mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddWordError {
    /// The word was empty or whitespace-only.
    #[error("word is empty or whitespace-only")]
    BlankWord,
}

/// The autocomplete engine: a prefix trie and an n-gram index kept in
/// lockstep, queried through a two-phase fill-then-backfill policy. Exact
/// prefix continuations (ranked by insertion frequency) always outrank
/// fuzzy candidates (ranked by n-gram similarity); fuzzy matching only tops
/// up under-filled result sets.
///
/// The API is synchronous and single-call: reads take `&self`, mutations
/// take `&mut self`, and there is no interior mutability. A deployment
/// sharing one engine across threads wraps it in `std::sync::RwLock` so any
/// number of `search` calls proceed concurrently while `add_word` takes the
/// write lock.
pub struct SuggestEngine {
    trie: PrefixTrie,
    ngram_index: NgramIndex,
    vocabulary: Vec<String>,
    config: SearchConfig,
}

impl SuggestEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            trie: PrefixTrie::new(),
            ngram_index: NgramIndex::new(config.ngram_size),
            vocabulary: Vec::new(),
            config,
        }
    }

    /// Seeds the engine from a word list. Blank entries are skipped;
    /// repeated entries bump the word's frequency. Insertion order decides
    /// frequency ties only, never correctness.
    pub fn initialize<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut indexed = 0usize;
        for word in words {
            if self.add_word(word.as_ref()).is_ok() {
                indexed += 1;
            }
        }
        debug!("seeded vocabulary with {indexed} words");
    }

    /// Indexes one word into both structures and the vocabulary list.
    /// An empty or whitespace-only word is rejected explicitly rather than
    /// silently ignored. Re-adding a word bumps its trie count; the n-gram
    /// index and vocabulary list stay duplicate-free.
    pub fn add_word(&mut self, word: &str) -> Result<(), AddWordError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(AddWordError::BlankWord);
        }
        let word = word.to_lowercase();
        self.trie.insert(&word);
        self.ngram_index.add_word(&word);
        if !self.vocabulary.iter().any(|w| w == &word) {
            self.vocabulary.push(word);
        }
        Ok(())
    }

    /// Searches with the configured `top_k`.
    pub fn search(&self, query: &str) -> Vec<SuggestionResult> {
        self.search_with_limit(query, self.config.top_k)
    }

    /// Two-phase search. The query is expected pre-trimmed by the caller;
    /// lowercasing happens here. An empty query yields an empty list.
    pub fn search_with_limit(&self, query: &str, top_k: usize) -> Vec<SuggestionResult> {
        if query.is_empty() || top_k == 0 {
            return Vec::new();
        }
        let query = query.to_lowercase();

        // Phase 1: enumerate the prefix subtree, keep the k most frequent.
        let mut results: Vec<SuggestionResult> = Vec::new();
        if let Some(node) = self.trie.find_node(&query) {
            let mut selector = TopKSelector::new(top_k);
            for (word, count) in self.trie.collect_words(node, &query) {
                selector.insert(ScoredItem { word, count });
            }
            results.extend(selector.into_ranked().into_iter().map(|item| {
                SuggestionResult {
                    word: item.word,
                    match_type: MatchType::Prefix,
                    score: item.count as f64,
                }
            }));
        }
        trace!("prefix phase: {} hits for {query:?}", results.len());

        // Phase 2: fuzzy backfill, oversampled to absorb candidates that
        // duplicate a prefix hit.
        if results.len() < top_k {
            let seen: HashSet<String> = results.iter().map(|r| r.word.clone()).collect();
            let fuzzy_limit = self.config.fuzzy_oversample * (top_k - results.len());
            let fuzzy = self.ngram_index.suggestions(
                &query,
                self.config.similarity_threshold,
                fuzzy_limit,
            );
            trace!("fuzzy phase: {} candidates for {query:?}", fuzzy.len());
            for m in fuzzy {
                if !seen.contains(&m.word) {
                    results.push(SuggestionResult {
                        word: m.word,
                        match_type: MatchType::Fuzzy,
                        score: m.similarity,
                    });
                }
            }
        }

        // Prefix entries already lead the list; just cut to size.
        results.truncate(top_k);
        results
    }

    /// The externally visible vocabulary, in insertion order, lowercased.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Default for SuggestEngine {
    fn default() -> Self {
        Self::new()
    }
}
