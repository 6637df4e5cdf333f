pub mod index;
pub mod selection;
pub mod sorted;
pub mod trie;
pub mod wordlist;
