//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::QuestionError;

/// Errors emitted by question providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("base url cannot carry a path: {0}")]
    InvalidBaseUrl(String),
    #[error("malformed question {index}: {source}")]
    Malformed {
        index: usize,
        #[source]
        source: QuestionError,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors emitted while reading configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid base url {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("quiz type cannot be empty")]
    EmptyQuizType,
    #[error("invalid value for {key}: {raw:?}")]
    InvalidValue { key: &'static str, raw: String },
}
