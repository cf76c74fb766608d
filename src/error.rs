//! Unified SDK error types.

use crate::domain::order::ValidationError;
use crate::shared::UnknownChain;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Chain(#[from] UnknownChain),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A successful query returned no matching record.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl HttpError {
    /// Classify a non-success response.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => HttpError::Unauthorized,
            404 => HttpError::NotFound(body),
            429 => HttpError::RateLimited,
            400..=499 => HttpError::BadRequest(body),
            _ => HttpError::ServerError { status, body },
        }
    }
}
