// File: src/core/trie.rs
use std::collections::BTreeMap;

use crate::core::types::NodeId;

/// A single trie node. Children are kept in a `BTreeMap` so sibling
/// iteration is lexicographic, which makes subtree enumeration (and any
/// frequency ties downstream of it) deterministic.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<char, NodeId>,
    is_end_of_word: bool,
    /// Incremented once per insertion of the word ending at this node.
    count: u64,
}

/// Arena-based prefix trie over the vocabulary.
///
/// All nodes live in a contiguous `Vec` and reference each other by index;
/// the root is always at index 0. The parent-to-child relationship is a
/// strict ownership tree: every node except the root is reachable from
/// exactly one parent.
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    nodes: Vec<TrieNode>,
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Inserts `word` (lowercased), creating nodes along the path as needed,
    /// then marks the final node as end-of-word and bumps its count.
    /// O(k) where k is word length. Always succeeds; inserting the empty
    /// string marks the root itself.
    pub fn insert(&mut self, word: &str) {
        let word = word.to_lowercase();
        let mut node_idx = 0;
        for ch in word.chars() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&ch) {
                id
            } else {
                let new_id = self.nodes.len();
                self.nodes.push(TrieNode::default());
                self.nodes[node_idx].children.insert(ch, new_id);
                new_id
            };
            node_idx = next_idx;
        }
        self.nodes[node_idx].is_end_of_word = true;
        self.nodes[node_idx].count += 1;
    }

    /// Walks `prefix` (lowercased) from the root along existing children
    /// only. Returns the node reached, or `None` as soon as a character has
    /// no child on the path. Non-mutating.
    pub fn find_node(&self, prefix: &str) -> Option<NodeId> {
        let prefix = prefix.to_lowercase();
        let mut node_idx = 0;
        for ch in prefix.chars() {
            node_idx = *self.nodes[node_idx].children.get(&ch)?;
        }
        Some(node_idx)
    }

    /// Occurrence count of an exact word, if it is stored.
    pub fn word_count(&self, word: &str) -> Option<u64> {
        let node = &self.nodes[self.find_node(word)?];
        node.is_end_of_word.then_some(node.count)
    }

    /// Enumerates every (word, count) pair in the subtree rooted at `node`,
    /// with each word reconstructed as `prefix_so_far` plus the path taken.
    ///
    /// Depth-first preorder with lexicographic sibling order, so output is
    /// deterministic. Iterative with an explicit work stack, so recursion
    /// depth never depends on word length.
    pub fn collect_words(&self, node: NodeId, prefix_so_far: &str) -> Vec<(String, u64)> {
        let mut words = Vec::new();
        let mut stack = vec![(node, prefix_so_far.to_string())];
        while let Some((idx, word)) = stack.pop() {
            let n = &self.nodes[idx];
            if n.is_end_of_word {
                words.push((word.clone(), n.count));
            }
            // Push in reverse so the smallest sibling is popped first.
            for (&ch, &child) in n.children.iter().rev() {
                let mut next = word.clone();
                next.push(ch);
                stack.push((child, next));
            }
        }
        words
    }
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_find() {
        let mut trie = PrefixTrie::new();
        trie.insert("java");
        assert!(trie.find_node("ja").is_some());
        assert!(trie.find_node("java").is_some());
        assert!(trie.find_node("javax").is_none());
        assert!(trie.find_node("q").is_none());
    }

    #[test]
    fn double_insert_counts_once_in_enumeration() {
        let mut trie = PrefixTrie::new();
        trie.insert("javascript");
        trie.insert("javascript");

        assert_eq!(trie.word_count("javascript"), Some(2));

        let node = trie.find_node("java").unwrap();
        let words = trie.collect_words(node, "java");
        assert_eq!(words, vec![("javascript".to_string(), 2)]);
    }

    #[test]
    fn lowercases_on_insert_and_lookup() {
        let mut trie = PrefixTrie::new();
        trie.insert("JavaScript");
        assert_eq!(trie.word_count("javascript"), Some(1));
        assert!(trie.find_node("JAVA").is_some());
    }

    #[test]
    fn empty_string_marks_root() {
        let mut trie = PrefixTrie::new();
        trie.insert("");
        assert_eq!(trie.word_count(""), Some(1));

        let root = trie.find_node("").unwrap();
        let words = trie.collect_words(root, "");
        assert_eq!(words, vec![(String::new(), 1)]);
    }

    #[test]
    fn enumeration_is_lexicographic() {
        let mut trie = PrefixTrie::new();
        for word in ["car", "cab", "cat", "ca"] {
            trie.insert(word);
        }
        let node = trie.find_node("ca").unwrap();
        let words: Vec<String> = trie
            .collect_words(node, "ca")
            .into_iter()
            .map(|(w, _)| w)
            .collect();
        assert_eq!(words, vec!["ca", "cab", "car", "cat"]);
    }

    #[test]
    fn prefix_node_that_is_not_a_word() {
        let mut trie = PrefixTrie::new();
        trie.insert("python");
        assert_eq!(trie.word_count("pyth"), None);

        let node = trie.find_node("pyth").unwrap();
        assert_eq!(
            trie.collect_words(node, "pyth"),
            vec![("python".to_string(), 1)]
        );
    }
}
