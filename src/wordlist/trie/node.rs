use std::fmt::{Debug, Formatter};

use crate::alphabet::{get_idx, letter_at, ALPHABET};

/// A trie node owns its children outright; a child slot is indexed by letter.
#[derive(Default, PartialEq, Eq)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET.len()],
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    pub(crate) fn get_child(&self, c: char) -> Option<&TrieNode> {
        get_idx(c).and_then(|idx| self.children[idx].as_deref())
    }

    fn get_or_create_child(&mut self, idx: usize) -> &mut TrieNode {
        self.children[idx].get_or_insert_with(Default::default)
    }

    /// Adds `word` below this node. Returns true if the word was not already present.
    /// Characters outside the alphabet must have been filtered out by the caller.
    pub(crate) fn insert(&mut self, word: &str) -> bool {
        let mut chars = word.chars();
        match chars.next() {
            None => {
                let added = !self.is_terminal;
                self.is_terminal = true;
                added
            }
            Some(c) => match get_idx(c) {
                Some(idx) => self.get_or_create_child(idx).insert(chars.as_str()),
                None => false,
            },
        }
    }

    pub(crate) fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    pub(crate) fn count_nodes(&self) -> usize {
        1 + self.into_iter().map(|(_, child)| child.count_nodes()).sum::<usize>()
    }

    /// Visits terminal nodes in lexicographic order, `path` holding the word spelled so far.
    pub(crate) fn traverse_prefix<F>(&self, path: &mut String, f: &mut F)
        where F: FnMut(&str) {
        if self.is_terminal {
            f(path);
        }
        for (letter, child) in self {
            path.push(letter);
            child.traverse_prefix(path, f);
            path.pop();
        }
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.into_iter()
                .map(|(letter, _)| letter)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Walks a node's children in alphabet order.
#[derive(Debug)]
pub(crate) struct TrieCursor<'a> {
    idx: usize,
    node: &'a TrieNode,
}

impl<'a> Iterator for TrieCursor<'a> {
    type Item = (char, &'a TrieNode);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.node.children.len() {
            let idx = self.idx;
            self.idx += 1;
            if let Some(child) = self.node.children[idx].as_deref() {
                return Some((letter_at(idx), child));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = (char, &'a TrieNode);
    type IntoIter = TrieCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        TrieCursor { idx: 0, node: self }
    }
}
