use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::DictionaryError;
use crate::wordlist::index::PrefixDictionary;
use crate::wordlist::selection::select_good_word;
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::PrefixTrie;

/// How to pick a child once the prefix is spelled out and the node is not a word.
trait ChildChooser {
    fn choose<'n>(&mut self, children: Vec<(char, &'n TrieNode)>) -> Option<(char, &'n TrieNode)>;
}

struct FirstChild;

impl ChildChooser for FirstChild {
    fn choose<'n>(&mut self, children: Vec<(char, &'n TrieNode)>) -> Option<(char, &'n TrieNode)> {
        children.into_iter().next()
    }
}

struct RandomChild<'r, R: Rng + ?Sized>(&'r mut R);

impl<R: Rng + ?Sized> ChildChooser for RandomChild<'_, R> {
    fn choose<'n>(&mut self, children: Vec<(char, &'n TrieNode)>) -> Option<(char, &'n TrieNode)> {
        children.choose(&mut *self.0).copied()
    }
}

impl PrefixTrie {
    fn get_node<'f>(&self, word: &str, node: Option<&'f TrieNode>) -> Option<&'f TrieNode> {
        let node = node?;
        let mut chars = word.chars();
        match chars.next() {
            None => Some(node),
            Some(fst) => self.get_node(chars.as_str(), node.get_child(fst)),
        }
    }

    /// Descends along `s`, then keeps choosing children until it reaches a word.
    /// The returned suffix is rebuilt by prepending each letter on the way back up.
    fn complete<C: ChildChooser>(node: &TrieNode, s: &str, chooser: &mut C) -> Option<String> {
        let mut chars = s.chars();
        let (head, child) = match chars.next() {
            Some(head) => (head, node.get_child(head)?),
            None => {
                if node.is_terminal {
                    return Some(String::new());
                }
                if !node.has_children() {
                    warn!("Trie node is neither a word nor has children");
                    return None;
                }
                chooser.choose(node.into_iter().collect())?
            }
        };
        let mut rest = Self::complete(child, chars.as_str(), chooser)?;
        rest.insert(0, head);
        Some(rest)
    }

    /// Like [`get_any_word_starting_with`](PrefixDictionary::get_any_word_starting_with),
    /// but picks uniformly among children at every branch past the prefix.
    pub fn get_random_word_starting_with<R: Rng + ?Sized>(&self, prefix: &str, rng: &mut R) -> Option<String> {
        Self::complete(&self.root, prefix, &mut RandomChild(rng))
    }
}

impl PrefixDictionary for PrefixTrie {
    fn is_word(&self, word: &str) -> bool {
        self.get_node(word, Some(&self.root))
            .map(|x| x.is_terminal).unwrap_or(false)
    }

    /// Deterministic: past the prefix, always follows the alphabetically first child.
    fn get_any_word_starting_with(&self, prefix: &str) -> Option<String> {
        Self::complete(&self.root, prefix, &mut FirstChild)
    }

    fn get_good_word_starting_with(&self, prefix: &str) -> Result<String, DictionaryError> {
        let candidates = self.words_starting_with(prefix);
        select_good_word(prefix, candidates.iter().map(String::as_str))
            .map(|good| {
                debug!("{:?} -> {:?} ({:?} of {} candidates)", prefix, good.word, good.tier, candidates.len());
                good.word.to_owned()
            })
            .ok_or_else(|| DictionaryError::NoSuchPrefix(prefix.to_owned()))
    }

    fn words_starting_with(&self, prefix: &str) -> Vec<String> {
        let mut words = vec![];
        if let Some(node) = self.get_node(prefix, Some(&self.root)) {
            let mut path = prefix.to_owned();
            node.traverse_prefix(&mut path, &mut |w| words.push(w.to_owned()));
        }
        words
    }

    fn len(&self) -> usize {
        self.word_count()
    }
}
