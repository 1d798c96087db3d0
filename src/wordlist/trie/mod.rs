pub mod trie;
pub mod search;
pub mod searchconfig;
pub mod node;
pub mod iterators;

pub use trie::Trie;
