use std::fmt::{Debug, Formatter};

use log::{info, trace};

use crate::alphabet::{is_alphabetic, normalize};
use crate::wordlist::trie::node::TrieNode;

/// A prefix tree over lowercase ASCII words.
///
/// Built by repeated insertion and never shrinks; inserting a word twice changes nothing.
#[derive(Default, PartialEq, Eq)]
pub struct PrefixTrie {
    pub(crate) root: TrieNode,
    words: usize,
}

impl PrefixTrie {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_lines<'f, I>(lines: I, min_word_len: usize) -> PrefixTrie
        where I: IntoIterator<Item=&'f str> {
        let mut trie = PrefixTrie::new();
        let mut discarded: usize = 0;
        for line in lines {
            match normalize(line, min_word_len) {
                Some(word) => { trie.insert(word); }
                None => {
                    trace!("Skipping line {:?}", line);
                    discarded += 1;
                }
            }
        }
        info!("Trie holds {} words in {} nodes ({} lines discarded)",
              trie.words, trie.node_count(), discarded);
        trie
    }

    /// Inserts `word`, returning false if it is empty or contains characters outside
    /// the alphabet.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || !is_alphabetic(word) {
            return false;
        }
        if self.root.insert(word) {
            self.words += 1;
        }
        true
    }

    pub fn add_all<'f, I>(&mut self, items: I)
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().for_each(|x| { self.insert(x); });
    }

    pub(crate) fn word_count(&self) -> usize {
        self.words
    }

    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }
}

impl Debug for PrefixTrie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        self.root.traverse_prefix(&mut String::new(), &mut |word| { l.entry(&word); });
        l.finish()
    }
}
