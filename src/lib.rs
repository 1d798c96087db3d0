//! A word dictionary built on a prefix tree, with alphabetical enumeration,
//! same-length spelling suggestions and `?`/`*` wildcard search.

pub mod alphabet;
pub mod error;
pub mod pattern;
pub mod wordlist;

pub use error::LexiconError;
pub use wordlist::index::Lexicon;
pub use wordlist::trie::Trie;
pub use wordlist::wordlist::{FileFormat, Wordlist};
