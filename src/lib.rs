pub mod alphabet;
pub mod config;
pub mod error;
pub mod wordlist;

pub use crate::config::{Backend, DictionaryConfig};
pub use crate::error::DictionaryError;
pub use crate::wordlist::index::PrefixDictionary;
pub use crate::wordlist::selection::{select_good_word, GoodWord, Tier};
pub use crate::wordlist::sorted::SortedWordList;
pub use crate::wordlist::trie::PrefixTrie;
pub use crate::wordlist::wordlist::Wordlist;
