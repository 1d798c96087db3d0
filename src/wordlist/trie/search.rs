use std::collections::HashSet;

use crate::alphabet::normalize;
use crate::error::LexiconError;
use crate::pattern::{Element, Pattern};
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    /// Stored words of the same length as `target` that differ from it in at
    /// most `max_distance` positions. Only substitutions are counted.
    pub fn suggest_corrections(&self, target: &str, max_distance: isize)
                               -> Result<HashSet<String>, LexiconError> {
        if max_distance < 0 {
            return Err(LexiconError::InvalidArgument(max_distance));
        }
        let target: Vec<char> = normalize(target).chars().collect();
        let mut found = HashSet::new();
        let mut path = String::new();
        Self::suggest_below(&self.root, &target, max_distance as usize, &mut path, &mut found);
        Ok(found)
    }

    fn suggest_below(node: &TrieNode, target: &[char], budget: usize,
                     path: &mut String, found: &mut HashSet<String>) {
        let (next, rest) = match target.split_first() {
            None => {
                if node.is_word() {
                    found.insert(path.clone());
                }
                return;
            }
            Some((&next, rest)) => (next, rest),
        };

        for child in node {
            let budget = if child.letter() == next {
                budget
            } else if budget > 0 {
                budget - 1
            } else {
                continue;
            };
            path.push(child.letter());
            Self::suggest_below(child, rest, budget, path, found);
            path.pop();
        }
    }

    /// Stored words matching a wildcard pattern, where `?` stands for exactly
    /// one letter and `*` for any run of letters, including none.
    pub fn match_pattern(&self, pattern: &str) -> HashSet<String> {
        let pattern = Pattern::from(normalize(pattern).as_str());
        let mut found = HashSet::new();
        let mut path = String::new();
        Self::match_below(&self.root, pattern.elements(), &mut path, &mut found);
        found
    }

    fn match_below(node: &TrieNode, pattern: &[Element],
                   path: &mut String, found: &mut HashSet<String>) {
        match pattern.split_first() {
            None => {
                if node.is_word() {
                    found.insert(path.clone());
                }
            }
            Some((Element::AnyOne, rest)) => {
                for child in node {
                    path.push(child.letter());
                    Self::match_below(child, rest, path, found);
                    path.pop();
                }
            }
            Some((Element::AnyRun, rest)) => {
                // star covers nothing more
                Self::match_below(node, rest, path, found);
                // star covers this child's letter and possibly more; the call
                // with the star kept also tries ending the run at the child
                for child in node {
                    path.push(child.letter());
                    Self::match_below(child, pattern, path, found);
                    path.pop();
                }
            }
            Some((Element::Literal(c), rest)) => {
                if let Some(child) = node.get_child(*c) {
                    path.push(child.letter());
                    Self::match_below(child, rest, path, found);
                    path.pop();
                }
            }
        }
    }
}
