//! Configuration for the Credal search client.

use serde::{Deserialize, Serialize};

use crate::error::{RetrieverError, Result};

/// The default Credal API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.credal.ai";

/// Configuration parameters for a [`CredalRetriever`](crate::CredalRetriever).
///
/// Construct one via [`CredalConfig::builder()`]. A built config always has a
/// non-empty collection identifier and API key; the optional tuning fields
/// (`max_chunks`, `merge_contents`, `threshold`) stay unset unless explicitly
/// provided, and unset fields are omitted from outgoing requests entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CredalConfig {
    /// Identifier of the document collection to search.
    pub document_collection_id: String,
    /// Bearer token for the Credal API.
    pub api_key: String,
    /// Opaque filter expression passed through to the service; not
    /// interpreted locally.
    pub metadata_filter_expression: Option<String>,
    /// Maximum number of chunks the service should return.
    pub max_chunks: Option<u32>,
    /// Whether the service should merge adjacent chunk contents.
    pub merge_contents: Option<bool>,
    /// Minimum relevance score for returned chunks.
    pub threshold: Option<f64>,
    /// Base URL of the Credal API.
    pub base_url: String,
}

impl CredalConfig {
    /// Create a new builder for constructing a [`CredalConfig`].
    pub fn builder() -> CredalConfigBuilder {
        CredalConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`CredalConfig`].
#[derive(Debug, Clone, Default)]
pub struct CredalConfigBuilder {
    document_collection_id: Option<String>,
    api_key: Option<String>,
    metadata_filter_expression: Option<String>,
    max_chunks: Option<u32>,
    merge_contents: Option<bool>,
    threshold: Option<f64>,
    base_url: Option<String>,
}

impl CredalConfigBuilder {
    /// Set the document collection identifier (required).
    pub fn document_collection_id(mut self, id: impl Into<String>) -> Self {
        self.document_collection_id = Some(id.into());
        self
    }

    /// Set the API key (required).
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the metadata filter expression.
    pub fn metadata_filter_expression(mut self, expr: impl Into<String>) -> Self {
        self.metadata_filter_expression = Some(expr.into());
        self
    }

    /// Set the maximum number of chunks to return.
    pub fn max_chunks(mut self, max: u32) -> Self {
        self.max_chunks = Some(max);
        self
    }

    /// Set whether the service should merge adjacent chunk contents.
    pub fn merge_contents(mut self, merge: bool) -> Self {
        self.merge_contents = Some(merge);
        self
    }

    /// Set the minimum relevance score for returned chunks.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Override the API base URL. A trailing slash is stripped.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Build the [`CredalConfig`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`RetrieverError::Config`] if:
    /// - `document_collection_id` is missing or empty
    /// - `api_key` is missing or empty
    /// - `max_chunks` is set to zero
    pub fn build(self) -> Result<CredalConfig> {
        let document_collection_id = self
            .document_collection_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                RetrieverError::Config("document_collection_id is required".to_string())
            })?;
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| RetrieverError::Config("api_key is required".to_string()))?;
        if self.max_chunks == Some(0) {
            return Err(RetrieverError::Config(
                "max_chunks must be greater than zero".to_string(),
            ));
        }

        let base_url = self
            .base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(CredalConfig {
            document_collection_id,
            api_key,
            metadata_filter_expression: self.metadata_filter_expression,
            max_chunks: self.max_chunks,
            merge_contents: self.merge_contents,
            threshold: self.threshold,
            base_url,
        })
    }
}
