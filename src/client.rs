//! HTTP client for the Credal document-search endpoint.

use tracing::{debug, error};

use crate::api::{SearchOptions, SearchRequest, SearchResponse};
use crate::config::CredalConfig;
use crate::document::RetrievedDocument;
use crate::error::Result;

/// Path of the document-collection search endpoint, relative to the base URL.
const SEARCH_PATH: &str = "/api/v0/search/searchDocumentCollection";

/// A retrieval client for the Credal document-search API.
///
/// Translates a query string into a flat list of [`RetrievedDocument`]s by
/// POSTing to the search endpoint and flattening the nested response. The
/// client is a stateless, immutable configuration record: it holds no
/// connection state, caches nothing between calls, and is safe to share
/// across concurrent callers. Each call opens its own transport session.
///
/// # Example
///
/// ```rust,no_run
/// use credal_retriever::{CredalConfig, CredalRetriever};
///
/// # async fn run() -> credal_retriever::Result<()> {
/// let config = CredalConfig::builder()
///     .document_collection_id("col_abc123")
///     .api_key(std::env::var("CREDAL_API_KEY").unwrap())
///     .threshold(0.5)
///     .build()?;
///
/// let retriever = CredalRetriever::new(config);
/// let documents = retriever.retrieve("vacation policy").await?;
/// # Ok(())
/// # }
/// ```
pub struct CredalRetriever {
    config: CredalConfig,
}

impl CredalRetriever {
    /// Create a new retriever from a validated configuration.
    pub fn new(config: CredalConfig) -> Self {
        Self { config }
    }

    /// Return a reference to the client configuration.
    pub fn config(&self) -> &CredalConfig {
        &self.config
    }

    /// Full URL of the search endpoint for this configuration.
    pub fn search_url(&self) -> String {
        format!("{}{SEARCH_PATH}", self.config.base_url)
    }

    /// Build the request body for a query.
    ///
    /// Pure transform of the stored configuration plus the query: the four
    /// top-level keys are always present, `metadataFilterExpression` is an
    /// explicit `null` when unset, and `searchOptions` contains exactly the
    /// tuning fields that were configured (an empty object when none are).
    pub fn build_payload<'a>(&'a self, query: &'a str) -> SearchRequest<'a> {
        SearchRequest {
            document_collection_id: &self.config.document_collection_id,
            search_query: query,
            metadata_filter_expression: self.config.metadata_filter_expression.as_deref(),
            search_options: SearchOptions {
                max_chunks: self.config.max_chunks,
                merge_contents: self.config.merge_contents,
                threshold: self.config.threshold,
            },
        }
    }

    /// Search the collection, suspending while the request is in flight.
    ///
    /// Opens a fresh transport session scoped to this call; it is released
    /// on every exit path, including cancellation at the await point. The
    /// flattened output is identical to [`retrieve_blocking`] for the same
    /// response body.
    ///
    /// # Errors
    ///
    /// - [`Transport`](crate::RetrieverError::Transport) on connection
    ///   failure or a non-2xx status.
    /// - [`MalformedResponse`](crate::RetrieverError::MalformedResponse) if
    ///   the body does not match the search-response contract.
    ///
    /// [`retrieve_blocking`]: CredalRetriever::retrieve_blocking
    pub async fn retrieve(&self, query: &str) -> Result<Vec<RetrievedDocument>> {
        debug!(
            collection = %self.config.document_collection_id,
            query_len = query.len(),
            "searching document collection"
        );

        let client = reqwest::Client::new();
        let response = client
            .post(self.search_url())
            .bearer_auth(&self.config.api_key)
            .json(&self.build_payload(query))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "search request failed");
                e
            })?
            .error_for_status()
            .map_err(|e| {
                error!(status = ?e.status(), "search endpoint returned an error status");
                e
            })?;

        let body = response.text().await?;
        Self::parse_response(&body)
    }

    /// Search the collection, blocking the calling thread.
    ///
    /// Same contract and error taxonomy as [`retrieve`], performed entirely
    /// on the caller's thread with no internal concurrency.
    ///
    /// [`retrieve`]: CredalRetriever::retrieve
    pub fn retrieve_blocking(&self, query: &str) -> Result<Vec<RetrievedDocument>> {
        debug!(
            collection = %self.config.document_collection_id,
            query_len = query.len(),
            "searching document collection (blocking)"
        );

        let client = reqwest::blocking::Client::new();
        let response = client
            .post(self.search_url())
            .bearer_auth(&self.config.api_key)
            .json(&self.build_payload(query))
            .send()
            .map_err(|e| {
                error!(error = %e, "search request failed");
                e
            })?
            .error_for_status()
            .map_err(|e| {
                error!(status = ?e.status(), "search endpoint returned an error status");
                e
            })?;

        let body = response.text()?;
        Self::parse_response(&body)
    }

    /// Deserialize and flatten a response body. Shared by both call paths.
    fn parse_response(body: &str) -> Result<Vec<RetrievedDocument>> {
        let response: SearchResponse = serde_json::from_str(body).map_err(|e| {
            error!(error = %e, "search response did not match the expected shape");
            e
        })?;
        let documents = response.into_documents();
        debug!(chunk_count = documents.len(), "search completed");
        Ok(documents)
    }
}
