//! Error types for client construction and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// A required environment variable is absent or blank.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// The HTTP client could not be built.
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
