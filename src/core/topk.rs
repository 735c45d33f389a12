// File: src/core/topk.rs
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A word with its occurrence count, as streamed through the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredItem {
    pub word: String,
    pub count: u64,
}

impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Rank is decided by count alone; the word only totalizes the order,
        // so the relative position of equal counts is unspecified.
        self.count
            .cmp(&other.count)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Fixed-capacity min-heap retaining the k highest-count items seen.
///
/// O(log k) per insert and O(k log k) to drain, so a stream of m candidates
/// costs O(m log k) instead of the O(m log m) of sorting everything.
#[derive(Debug)]
pub struct TopKSelector {
    capacity: usize,
    heap: BinaryHeap<Reverse<ScoredItem>>,
}

impl TopKSelector {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Offers one item. Below capacity it is kept unconditionally. At
    /// capacity the current minimum is evicted only when `item.count` is
    /// strictly greater; a tie keeps the earlier arrival.
    pub fn insert(&mut self, item: ScoredItem) {
        if self.capacity == 0 {
            return;
        }
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(item));
        } else if let Some(Reverse(min)) = self.heap.peek() {
            if item.count > min.count {
                self.heap.pop();
                self.heap.push(Reverse(item));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Retained items, highest count first. Equal counts come out in an
    /// unspecified relative order.
    pub fn into_ranked(self) -> Vec<ScoredItem> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(item)| item)
            .collect()
    }
}
