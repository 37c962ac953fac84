//! Output record type for retrieved chunks.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One retrieved chunk of a source document, paired with its metadata.
///
/// Each record corresponds to a single chunk returned by the search service.
/// The metadata map carries `document_id`, `document_name`, every
/// document-level metadata key verbatim, and the chunk's `chunk_id`,
/// `chunk_index`, and `chunk_score`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetrievedDocument {
    /// The text content of the chunk.
    pub content: String,
    /// Key-value metadata describing the chunk and its source document.
    pub metadata: Map<String, Value>,
}
