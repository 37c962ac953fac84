//! Wire schema for the Credal document-search endpoint.
//!
//! Request and response bodies are modeled as typed serde structs so that a
//! response missing `results`, `chunks`, or any required key fails
//! deserialization instead of surfacing as an undefined lookup later.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::document::RetrievedDocument;

/// Request body for `POST /api/v0/search/searchDocumentCollection`.
///
/// `metadata_filter_expression` serializes as an explicit `null` when unset;
/// the service treats the key as always present.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest<'a> {
    pub document_collection_id: &'a str,
    pub search_query: &'a str,
    pub metadata_filter_expression: Option<&'a str>,
    pub search_options: SearchOptions,
}

/// Per-call search tuning options.
///
/// Only fields that were set appear in the serialized payload. The service
/// distinguishes an absent key from `false`/`0`, so explicit values are
/// never dropped: `threshold: Some(0.0)` serializes as `"threshold": 0.0`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chunks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_contents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

/// Top-level response body from the search endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// One source document matched by the search, with its scored chunks.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub document_id: String,
    pub document_name: String,
    pub document_metadata: Map<String, Value>,
    pub chunks: Vec<ResultChunk>,
}

/// One chunk within a [`SearchResult`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultChunk {
    pub text: String,
    pub chunk_id: String,
    pub chunk_index: u64,
    pub score: f64,
}

impl SearchResponse {
    /// Flatten the response into one [`RetrievedDocument`] per chunk.
    ///
    /// Ordering mirrors the service exactly: result order, then chunk order
    /// within each result. No sorting, deduplication, or score filtering.
    ///
    /// Metadata keys are inserted in a fixed order — document identity,
    /// document-level metadata verbatim, then chunk fields — so a
    /// document-level key that collides with a chunk-level key (for example
    /// `chunk_id`) is overwritten by the chunk value.
    pub fn into_documents(self) -> Vec<RetrievedDocument> {
        self.results
            .into_iter()
            .flat_map(|result| {
                let mut base = Map::new();
                base.insert("document_id".to_string(), Value::String(result.document_id));
                base.insert("document_name".to_string(), Value::String(result.document_name));
                base.extend(result.document_metadata);

                result.chunks.into_iter().map(move |chunk| {
                    let mut metadata = base.clone();
                    metadata.insert("chunk_id".to_string(), Value::String(chunk.chunk_id));
                    metadata.insert("chunk_index".to_string(), Value::from(chunk.chunk_index));
                    metadata.insert("chunk_score".to_string(), Value::from(chunk.score));
                    RetrievedDocument { content: chunk.text, metadata }
                })
            })
            .collect()
    }
}
