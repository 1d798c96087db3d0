use std::slice::Iter;

use crate::wordlist::trie::node::TrieNode;

/// Children of a node in ascending letter order.
#[derive(Debug, Clone)]
pub struct TrieCursor<'a> {
    children: Iter<'a, TrieNode>,
}

impl<'a> TrieCursor<'a> {
    pub(crate) fn new(children: Iter<'a, TrieNode>) -> TrieCursor<'a> {
        TrieCursor { children }
    }
}

impl<'a> Iterator for TrieCursor<'a> {
    type Item = &'a TrieNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.children.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.children.size_hint()
    }
}

impl ExactSizeIterator for TrieCursor<'_> {}

/// Depth-first walk yielding every word below a node in alphabetical order.
///
/// One cursor is kept per level; `path` holds the letters leading to the node
/// whose cursor is on top of the stack.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    stack: Vec<TrieCursor<'a>>,
    path: String,
    pending: Option<String>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(start: &'a TrieNode, prefix: String) -> Words<'a> {
        Words { stack: vec![start.children_in_order()], path: prefix, pending: None }
    }

    pub(crate) fn empty() -> Words<'a> {
        Words { stack: vec![], path: String::new(), pending: None }
    }

    /// Makes the walk yield the start path itself before its descendants.
    pub(crate) fn yield_start(&mut self) {
        self.pending = Some(self.path.clone());
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(word) = self.pending.take() {
            return Some(word);
        }
        loop {
            let cursor = self.stack.last_mut()?;
            match cursor.next() {
                Some(child) => {
                    self.path.push(child.letter());
                    self.stack.push(child.children_in_order());
                    if child.is_word() {
                        return Some(self.path.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    // the bottom cursor belongs to the start node, whose letters stay
                    if !self.stack.is_empty() {
                        self.path.pop();
                    }
                }
            }
        }
    }
}
