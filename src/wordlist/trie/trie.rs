use std::fmt::{Debug, Formatter};

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::alphabet::normalize;
use crate::wordlist::index::Lexicon;
use crate::wordlist::trie::iterators::Words;
use crate::wordlist::trie::node::TrieNode;

/// A dictionary of lower-case words stored as a prefix tree.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Trie {
    pub(crate) root: TrieNode,
    word_count: usize,
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            root: TrieNode::root(),
            word_count: 0,
        }
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Adds `word`, returning false if it was already present. The empty
    /// string is never stored.
    pub fn insert(&mut self, word: &str) -> bool {
        let word: Vec<char> = normalize(word).chars().collect();
        self.mark_word(&word)
    }

    fn mark_word(&mut self, word: &[char]) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut current = &mut self.root;
        for &c in word {
            current = current.get_or_create_child(c);
        }
        if current.is_word() {
            return false;
        }
        current.set_word(true);
        self.word_count += 1;
        true
    }

    /// Removes `word`, returning false if it was not stored. Branches left
    /// without any word below them are dropped.
    pub fn remove(&mut self, word: &str) -> bool {
        let word: Vec<char> = normalize(word).chars().collect();
        let removed = Self::remove_below(&mut self.root, &word);
        if removed {
            self.word_count -= 1;
        }
        removed
    }

    fn remove_below(node: &mut TrieNode, word: &[char]) -> bool {
        let (c, rest) = match word.split_first() {
            None => {
                let was_word = node.is_word();
                node.set_word(false);
                return was_word;
            }
            Some((&c, rest)) => (c, rest),
        };
        let (removed, dangling) = match node.get_child_mut(c) {
            None => return false,
            Some(child) => {
                let removed = Self::remove_below(child, rest);
                (removed, !child.is_word() && !child.has_children())
            }
        };
        if removed && dangling {
            node.remove_child(c);
        }
        removed
    }

    fn get_node(&self, word: &str) -> Option<&TrieNode> {
        self.root.descend(normalize(word).chars())
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.get_node(word).map(|x| x.is_word()).unwrap_or(false)
    }

    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.get_node(prefix).is_some()
    }

    /// All stored words in alphabetical order. Each call starts a fresh walk.
    pub fn words(&self) -> Words<'_> {
        Words::new(&self.root, String::new())
    }

    /// Stored words beginning with `prefix`, in alphabetical order.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        let prefix = normalize(prefix);
        match self.root.descend(prefix.chars()) {
            None => Words::empty(),
            Some(start) => {
                let mut words = Words::new(start, prefix);
                if start.is_word() {
                    words.yield_start();
                }
                words
            }
        }
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.words()
    }
}

impl Lexicon for Trie {
    fn add_word(&mut self, word: &str) -> bool {
        self.insert(word)
    }

    fn remove_word(&mut self, word: &str) -> bool {
        self.remove(word)
    }

    fn contains_word(&self, word: &str) -> bool {
        Trie::contains_word(self, word)
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        Trie::contains_prefix(self, prefix)
    }

    fn num_words(&self) -> usize {
        self.word_count
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item=&'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.add_all(iter);
        trie
    }
}

/// One entry of a serialized trie: nodes are written in pre-order, `depth`
/// counting from 1 for children of the root.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct NodeRecord {
    letter: char,
    is_word: bool,
    depth: usize,
}

impl Serialize for Trie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut seq = serializer.serialize_seq(None)?;
        self.root.traverse_prefix(&mut |node, depth| {
            seq.serialize_element(&NodeRecord {
                letter: node.letter(),
                is_word: node.is_word(),
                depth,
            })
        })?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Trie {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        deserializer.deserialize_seq(DeserializeTrieVisitor {})
    }
}

struct DeserializeTrieVisitor {}

impl<'de> Visitor<'de> for DeserializeTrieVisitor {
    type Value = Trie;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(formatter, "a sequence of trie nodes in pre-order")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error> where A: SeqAccess<'de> {
        let mut trie = Trie::new();
        let mut path: Vec<char> = vec![];

        while let Some(node) = seq.next_element::<NodeRecord>()? {
            if node.depth == 0 || node.depth > path.len() + 1 {
                return Err(de::Error::custom(format!(
                    "node {:?} at depth {} under a path of length {}",
                    node.letter, node.depth, path.len())));
            }
            if normalize(&node.letter.to_string()) != node.letter.to_string() {
                return Err(de::Error::custom(format!(
                    "node {:?} is not a lower-case letter", node.letter)));
            }
            path.truncate(node.depth - 1);
            path.push(node.letter);

            let mut current = &mut trie.root;
            for &c in &path {
                current = current.get_or_create_child(c);
            }
            if node.is_word && !current.is_word() {
                current.set_word(true);
                trie.word_count += 1;
            }
        }
        Ok(trie)
    }
}


impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("word_count", &self.word_count)
            .field("words", &self.words().collect::<Vec<_>>())
            .finish()
    }
}
