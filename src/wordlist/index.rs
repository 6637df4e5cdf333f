use crate::error::DictionaryError;

/// Query surface shared by every dictionary backend.
///
/// A built dictionary is read-only, so implementations can be shared across threads
/// once construction has finished.
pub trait PrefixDictionary: Send + Sync {
    fn is_word(&self, word: &str) -> bool;

    /// Some dictionary word starting with `prefix`, or `None` if there is none.
    /// Which word is returned is up to the backend.
    fn get_any_word_starting_with(&self, prefix: &str) -> Option<String>;

    /// The completion of `prefix` chosen by [`select_good_word`](super::selection::select_good_word).
    fn get_good_word_starting_with(&self, prefix: &str) -> Result<String, DictionaryError>;

    /// Every word starting with `prefix`, in lexicographic order.
    fn words_starting_with(&self, prefix: &str) -> Vec<String>;

    /// Number of distinct words.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
