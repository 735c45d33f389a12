pub mod engine;
pub mod topk;
pub mod trie;
pub mod types;
