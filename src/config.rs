use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::DictionaryError;

pub const DEFAULT_MIN_WORD_LEN: usize = 2;

/// Which data structure backs a [`Wordlist`](crate::wordlist::wordlist::Wordlist).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Sorted,
    #[default]
    Trie,
}

impl std::str::FromStr for Backend {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sorted" => Ok(Backend::Sorted),
            "trie" => Ok(Backend::Trie),
            other => Err(DictionaryError::InvalidConfig(format!("unknown backend {:?}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct DictionaryConfig {
    #[builder(default = DEFAULT_MIN_WORD_LEN)]
    pub min_word_len: usize,
    #[builder(default)]
    pub backend: Backend,
    /// Sort and dedup input for the sorted backend instead of trusting the caller.
    #[builder(default)]
    pub sort_input: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig::builder().build()
    }
}

impl DictionaryConfig {
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let config: DictionaryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DictionaryError> {
        if self.min_word_len == 0 {
            return Err(DictionaryError::InvalidConfig(
                "min_word_len must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Backend, DictionaryConfig, DEFAULT_MIN_WORD_LEN};
    use crate::error::DictionaryError;

    #[test]
    fn defaults_to_trie_backend() {
        let config = DictionaryConfig::default();
        assert_eq!(config.backend, Backend::Trie);
        assert_eq!(config.min_word_len, DEFAULT_MIN_WORD_LEN);
        assert!(!config.sort_input);
    }

    #[test]
    fn parses_partial_json() {
        let config = DictionaryConfig::from_json(r#"{"backend": "sorted"}"#).unwrap();
        assert_eq!(config.backend, Backend::Sorted);
        assert_eq!(config.min_word_len, DEFAULT_MIN_WORD_LEN);
    }

    #[test]
    fn rejects_zero_min_word_len() {
        let err = DictionaryConfig::from_json(r#"{"min_word_len": 0}"#).unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = DictionaryConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, DictionaryError::Json(_)));
    }

    #[test]
    fn parses_backend_names() {
        assert_eq!("Sorted".parse::<Backend>().unwrap(), Backend::Sorted);
        assert_eq!("trie".parse::<Backend>().unwrap(), Backend::Trie);
        assert!("hash".parse::<Backend>().is_err());
    }
}
