// File: src/fuzzy/ngram.rs
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// A fuzzy candidate scored by Jaccard similarity of n-gram sets.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub word: String,
    pub similarity: f64,
}

/// Inverted index from fixed-length character n-grams to the words that
/// contain them, plus a cached n-gram set per word.
///
/// Lookup gathers every word sharing at least one n-gram with the query and
/// scores it by Jaccard similarity, so the posting lists act as a cheap
/// candidate filter in front of the set comparison.
#[derive(Debug, Clone)]
pub struct NgramIndex {
    n: usize,
    /// n-gram -> posting list of words containing it.
    postings: HashMap<String, Vec<String>>,
    /// word -> its cached n-gram set.
    word_ngrams: HashMap<String, BTreeSet<String>>,
}

impl NgramIndex {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            postings: HashMap::new(),
            word_ngrams: HashMap::new(),
        }
    }

    /// The distinct length-`n` character windows over `word` padded with one
    /// space sentinel on each side. The sentinels let the index tell
    /// word-start and word-end adjacency apart. Words whose padded length is
    /// shorter than `n` produce an empty set and stay invisible to fuzzy
    /// lookup; a limitation, not an error.
    pub fn ngrams_of(&self, word: &str) -> BTreeSet<String> {
        let padded: Vec<char> = std::iter::once(' ')
            .chain(word.chars())
            .chain(std::iter::once(' '))
            .collect();
        let mut grams = BTreeSet::new();
        if padded.len() >= self.n {
            for window in padded.windows(self.n) {
                grams.insert(window.iter().collect());
            }
        }
        grams
    }

    /// Indexes `word` (lowercased): caches its n-gram set and appends the
    /// word to the posting list of each n-gram. Idempotent: a word already
    /// in the cache is not appended again, so posting lists never hold
    /// duplicate entries.
    pub fn add_word(&mut self, word: &str) {
        let word = word.to_lowercase();
        if self.word_ngrams.contains_key(&word) {
            return;
        }
        let grams = self.ngrams_of(&word);
        for gram in &grams {
            self.postings.entry(gram.clone()).or_default().push(word.clone());
        }
        self.word_ngrams.insert(word, grams);
    }

    /// Jaccard similarity |a ∩ b| / |a ∪ b|. Symmetric; 1.0 for identical
    /// non-empty sets; defined as 0.0 when both sets are empty.
    pub fn similarity(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
        let union = a.union(b).count();
        if union == 0 {
            return 0.0;
        }
        let intersection = a.intersection(b).count();
        intersection as f64 / union as f64
    }

    /// Fuzzy lookup: every word sharing at least one n-gram with `query`
    /// becomes a candidate (deduplicated); candidates with similarity at or
    /// below `threshold` are discarded; the rest are ranked by similarity
    /// descending, ties by word ascending so the ordering is reproducible,
    /// and capped at `limit`.
    pub fn suggestions(&self, query: &str, threshold: f64, limit: usize) -> Vec<FuzzyMatch> {
        let query = query.to_lowercase();
        let query_grams = self.ngrams_of(&query);

        let mut candidates = BTreeSet::new();
        for gram in &query_grams {
            if let Some(words) = self.postings.get(gram) {
                candidates.extend(words.iter().cloned());
            }
        }

        let mut matches: Vec<FuzzyMatch> = candidates
            .into_iter()
            .filter_map(|word| {
                let grams = self.word_ngrams.get(&word)?;
                let similarity = Self::similarity(&query_grams, grams);
                (similarity > threshold).then_some(FuzzyMatch { word, similarity })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.word.cmp(&b.word))
        });
        matches.truncate(limit);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grams(index: &NgramIndex, word: &str) -> BTreeSet<String> {
        index.ngrams_of(word)
    }

    #[test]
    fn bigrams_include_boundary_sentinels() {
        let index = NgramIndex::new(2);
        let set = grams(&index, "cat");
        let expected: BTreeSet<String> = [" c", "ca", "at", "t "]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn short_padded_word_yields_empty_set() {
        let index = NgramIndex::new(4);
        // " a " has 3 chars, shorter than n = 4.
        assert!(grams(&index, "a").is_empty());
    }

    #[test]
    fn similarity_is_symmetric_and_reflexive() {
        let index = NgramIndex::new(2);
        let a = grams(&index, "python");
        let b = grams(&index, "pyhton");
        assert_eq!(NgramIndex::similarity(&a, &b), NgramIndex::similarity(&b, &a));
        assert_eq!(NgramIndex::similarity(&a, &a), 1.0);
    }

    #[test]
    fn similarity_of_disjoint_and_empty_sets() {
        let index = NgramIndex::new(2);
        let a = grams(&index, "aa");
        let b = grams(&index, "zz");
        assert_eq!(NgramIndex::similarity(&a, &b), 0.0);

        let empty = BTreeSet::new();
        assert_eq!(NgramIndex::similarity(&empty, &empty), 0.0);
    }

    #[test]
    fn transposition_is_found_above_threshold() {
        let mut index = NgramIndex::new(2);
        index.add_word("python");

        let matches = index.suggestions("pyhton", 0.2, 10);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].word, "python");
        assert!(matches[0].similarity > 0.2);
    }

    #[test]
    fn low_similarity_candidates_are_discarded() {
        let mut index = NgramIndex::new(2);
        index.add_word("python");
        index.add_word("pythagoras");

        // "pythagoras" shares the leading grams with "python" (sim ~0.29);
        // a stricter threshold keeps only the exact match.
        let matches = index.suggestions("python", 0.5, 10);
        let words: Vec<&str> = matches.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["python"]);
    }

    #[test]
    fn re_adding_a_word_does_not_duplicate_postings() {
        let mut index = NgramIndex::new(2);
        index.add_word("rust");
        index.add_word("rust");

        for list in index.postings.values() {
            assert_eq!(list.iter().filter(|w| *w == "rust").count(), 1);
        }
    }

    #[test]
    fn results_are_ranked_by_similarity_then_word() {
        let mut index = NgramIndex::new(2);
        index.add_word("java");
        index.add_word("javascript");

        let matches = index.suggestions("java", 0.2, 10);
        assert_eq!(matches[0].word, "java");
        assert_eq!(matches[0].similarity, 1.0);
        assert!(matches.len() == 2 && matches[1].word == "javascript");
        assert!(matches[1].similarity < 1.0);
    }

    #[test]
    fn limit_caps_the_result_count() {
        let mut index = NgramIndex::new(2);
        for word in ["cart", "card", "care", "carp"] {
            index.add_word(word);
        }
        assert_eq!(index.suggestions("cars", 0.2, 2).len(), 2);
    }
}
