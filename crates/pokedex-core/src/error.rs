//! Error Types
//!
//! Transport and persistence failures. Cancellation and validation
//! rejections are deliberately not represented here.

use thiserror::Error;

/// Result type for data-source operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Failure talking to one of the data sources
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("graphql error: {0}")]
    Graphql(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Failure reading or writing the persisted key-value store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write failed: {0}")]
    Write(String),
}
