use std::fmt::{Debug, Formatter};

use derive_new::new;

use crate::wordlist::trie::iterators::TrieCursor;

/// Letter carried by the root node. Never part of a word.
pub(crate) const SENTINEL: char = '\0';

/// One letter slot of the trie. Children are kept sorted by letter with at
/// most one child per letter.
#[derive(new, Default, Clone, PartialEq, Eq)]
pub struct TrieNode {
    letter: char,
    is_word: bool,
    #[new(default)]
    children: Vec<TrieNode>,
}

impl TrieNode {
    pub(crate) fn root() -> TrieNode {
        TrieNode::new(SENTINEL, false)
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn is_word(&self) -> bool {
        self.is_word
    }

    pub fn set_word(&mut self, is_word: bool) {
        self.is_word = is_word;
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    fn position(&self, c: char) -> Result<usize, usize> {
        self.children.binary_search_by_key(&c, |x| x.letter)
    }

    /// Inserts `node` at its sorted position and returns the child now holding
    /// that letter. If the letter is already present the existing child (and its
    /// subtree) is kept and `node` is dropped.
    pub fn add_child(&mut self, node: TrieNode) -> &mut TrieNode {
        let idx = match self.position(node.letter) {
            Ok(idx) => idx,
            Err(idx) => {
                self.children.insert(idx, node);
                idx
            }
        };
        &mut self.children[idx]
    }

    pub fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.position(c).ok().map(|idx| &self.children[idx])
    }

    pub(crate) fn get_child_mut(&mut self, c: char) -> Option<&mut TrieNode> {
        match self.position(c) {
            Ok(idx) => Some(&mut self.children[idx]),
            Err(_) => None,
        }
    }

    pub(crate) fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.add_child(TrieNode::new(c, false))
    }

    pub fn remove_child(&mut self, c: char) -> Option<TrieNode> {
        self.position(c).ok().map(|idx| self.children.remove(idx))
    }

    pub fn children_in_order(&self) -> TrieCursor<'_> {
        self.into_iter()
    }

    /// Follows `word` one letter at a time from this node.
    pub(crate) fn descend<I>(&self, word: I) -> Option<&TrieNode>
        where I: IntoIterator<Item=char> {
        word.into_iter().try_fold(self, |node, c| node.get_child(c))
    }

    /// Visits every node below this one in pre-order, with its depth (children
    /// of this node are at depth 1). Stops at the first error.
    pub(crate) fn traverse_prefix<E, F>(&self, f: &mut F) -> Result<(), E>
        where F: FnMut(&TrieNode, usize) -> Result<(), E> {
        let mut stack: Vec<(&TrieNode, usize)> = self.children.iter().rev()
            .map(|x| (x, 1))
            .collect();
        while let Some((node, depth)) = stack.pop() {
            f(node, depth)?;
            stack.extend(node.children.iter().rev().map(|x| (x, depth + 1)));
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = &'a TrieNode;
    type IntoIter = TrieCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        TrieCursor::new(self.children.iter())
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("is_word", &self.is_word)
            .field("children", &self.children.iter()
                .map(|x| x.letter)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use crate::wordlist::trie::node::TrieNode;

    fn letters(node: &TrieNode) -> String {
        node.children_in_order().map(|x| x.letter()).collect()
    }

    #[test]
    fn children_stay_sorted() {
        let mut node = TrieNode::root();
        for c in "dbeac".chars() {
            node.add_child(TrieNode::new(c, false));
        }
        assert_eq!(letters(&node), "abcde");
    }

    #[test]
    fn add_existing_child_keeps_subtree() {
        let mut node = TrieNode::root();
        node.add_child(TrieNode::new('a', true))
            .add_child(TrieNode::new('t', true));

        let kept = node.add_child(TrieNode::new('a', false));
        assert!(kept.is_word());
        assert!(kept.get_child('t').is_some());
        assert_eq!(letters(&node), "a");
    }

    #[test]
    fn get_and_remove_child() {
        let mut node = TrieNode::root();
        node.add_child(TrieNode::new('x', false));
        node.add_child(TrieNode::new('m', true));

        assert_eq!(node.get_child('m').map(|x| x.is_word()), Some(true));
        assert!(node.get_child('q').is_none());

        assert!(node.remove_child('q').is_none());
        assert_eq!(node.remove_child('m').map(|x| x.letter()), Some('m'));
        assert!(node.get_child('m').is_none());
        assert_eq!(letters(&node), "x");
    }

    #[test]
    fn children_iteration_restarts() {
        let mut node = TrieNode::root();
        node.add_child(TrieNode::new('b', false));
        node.add_child(TrieNode::new('a', false));
        assert_eq!(letters(&node), "ab");
        assert_eq!(letters(&node), "ab");
    }

    #[test]
    fn set_word_flips_flag() {
        let mut node = TrieNode::new('a', false);
        node.set_word(true);
        assert!(node.is_word());
        node.set_word(false);
        assert!(!node.is_word());
    }

    #[test]
    fn traverse_prefix_visits_in_letter_order() {
        let mut root = TrieNode::root();
        let b = root.add_child(TrieNode::new('b', false));
        b.add_child(TrieNode::new('e', true));
        root.add_child(TrieNode::new('a', true));

        let mut seen = vec![];
        root.traverse_prefix::<(), _>(&mut |node, depth| {
            seen.push((node.letter(), depth));
            Ok(())
        }).unwrap();
        assert_eq!(seen, vec![('a', 1), ('b', 1), ('e', 2)]);
    }
}
