//! Error types for the `credal-retriever` crate.

use thiserror::Error;

/// Errors that can occur while retrieving documents.
#[derive(Debug, Error)]
pub enum RetrieverError {
    /// Required configuration was missing or invalid at build time.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP request failed: connection, DNS, timeout, or a non-2xx
    /// status from the search endpoint.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON or did not match the
    /// documented search-response contract.
    #[error("malformed search response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// A convenience result type for retrieval operations.
pub type Result<T> = std::result::Result<T, RetrieverError>;
