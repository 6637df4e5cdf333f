use std::path::PathBuf;

/// Errors surfaced by dictionary construction and queries.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("no dictionary word starts with {0:?}")]
    NoSuchPrefix(String),

    #[error("invalid dictionary config: {0}")]
    InvalidConfig(String),

    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
