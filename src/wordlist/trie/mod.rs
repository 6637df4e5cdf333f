pub mod trie;
pub mod search;

mod node;

pub use trie::PrefixTrie;
