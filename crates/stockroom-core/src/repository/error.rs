use thiserror::Error;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("could not decode store response: {0}")]
    Decode(String),

    #[error("malformed record '{key}': {reason}")]
    Malformed { key: String, reason: String },

    #[error("store unavailable")]
    Unavailable,
}
