use std::time::Instant;

use delegate::delegate;
use log::info;

use crate::config::{Backend, DictionaryConfig};
use crate::error::DictionaryError;
use crate::wordlist::index::PrefixDictionary;
use crate::wordlist::sorted::SortedWordList;
use crate::wordlist::trie::PrefixTrie;

/// A dictionary whose backing structure is chosen by [`DictionaryConfig`].
pub struct Wordlist {
    backend: Backend,
    inner: Box<dyn PrefixDictionary>,
}

impl Wordlist {
    pub fn from_lines<'f, I>(lines: I, config: &DictionaryConfig) -> Result<Wordlist, DictionaryError>
        where I: IntoIterator<Item=&'f str> {
        config.validate()?;
        let start = Instant::now();
        let inner: Box<dyn PrefixDictionary> = match config.backend {
            Backend::Sorted if config.sort_input => {
                Box::new(SortedWordList::from_unsorted(lines, config.min_word_len))
            }
            Backend::Sorted => Box::new(SortedWordList::from_lines(lines, config.min_word_len)),
            Backend::Trie => Box::new(PrefixTrie::from_lines(lines, config.min_word_len)),
        };
        info!("Built {:?} dictionary of {} words in {}s",
              config.backend, inner.len(), start.elapsed().as_secs_f64());
        Ok(Wordlist { backend: config.backend, inner })
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    delegate! {
        to self.inner {
            pub fn is_word(&self, word: &str) -> bool;
            pub fn get_any_word_starting_with(&self, prefix: &str) -> Option<String>;
            pub fn get_good_word_starting_with(&self, prefix: &str) -> Result<String, DictionaryError>;
            pub fn words_starting_with(&self, prefix: &str) -> Vec<String>;
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }
}
