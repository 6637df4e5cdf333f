use std::cmp::Ordering;

use log::{debug, info, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::alphabet::normalize;
use crate::error::DictionaryError;
use crate::wordlist::index::PrefixDictionary;
use crate::wordlist::selection::select_good_word;

/// A word list answered by binary search.
///
/// The words must already be in lexicographic order; `from_lines` keeps them in the
/// order given and drops repeated words. Unsorted input gives wrong answers rather
/// than an error. Use [`SortedWordList::from_unsorted`] when the source order is not known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedWordList {
    words: Vec<String>,
}

impl SortedWordList {
    pub fn from_lines<'f, I>(lines: I, min_word_len: usize) -> SortedWordList
        where I: IntoIterator<Item=&'f str> {
        let mut discarded: usize = 0;
        let mut words: Vec<String> = lines.into_iter()
            .filter_map(|line| {
                let word = normalize(line, min_word_len);
                if word.is_none() {
                    trace!("Skipping line {:?}", line);
                    discarded += 1;
                }
                word.map(str::to_owned)
            })
            .collect();
        // Sorted input puts duplicates next to each other.
        words.dedup();
        info!("Sorted word list holds {} words ({} lines discarded)", words.len(), discarded);
        SortedWordList { words }
    }

    pub fn from_unsorted<'f, I>(lines: I, min_word_len: usize) -> SortedWordList
        where I: IntoIterator<Item=&'f str> {
        let mut list = Self::from_lines(lines, min_word_len);
        let before = list.words.len();
        list.words.sort_unstable();
        list.words.dedup();
        debug!("Sorted input, dropped {} duplicates", before - list.words.len());
        list
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The contiguous run of words that start with `prefix`.
    fn run_starting_with(&self, prefix: &str) -> &[String] {
        let start = self.words.partition_point(|w| w.as_str() < prefix);
        let len = self.words[start..].iter()
            .take_while(|w| w.starts_with(prefix))
            .count();
        &self.words[start..start + len]
    }

    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}

impl PrefixDictionary for SortedWordList {
    fn is_word(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    fn get_any_word_starting_with(&self, prefix: &str) -> Option<String> {
        let mut lo = 0;
        let mut hi = self.words.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let word = &self.words[mid];
            if word.starts_with(prefix) {
                return Some(word.clone());
            }
            match word.as_str().cmp(prefix) {
                Ordering::Greater => hi = mid,
                _ => lo = mid + 1,
            }
        }
        None
    }

    fn get_good_word_starting_with(&self, prefix: &str) -> Result<String, DictionaryError> {
        let run = self.run_starting_with(prefix);
        select_good_word(prefix, run.iter().map(String::as_str))
            .map(|good| {
                debug!("{:?} -> {:?} ({:?} of {} candidates)", prefix, good.word, good.tier, run.len());
                good.word.to_owned()
            })
            .ok_or_else(|| DictionaryError::NoSuchPrefix(prefix.to_owned()))
    }

    fn words_starting_with(&self, prefix: &str) -> Vec<String> {
        self.run_starting_with(prefix).to_vec()
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}
