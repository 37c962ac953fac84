//! Pipeline-facing retrieval traits.
//!
//! Downstream pipelines depend on these traits rather than on
//! [`CredalRetriever`](crate::CredalRetriever) directly, so a different
//! backend (or a test double) can be swapped in at the seam.

use async_trait::async_trait;

use crate::client::CredalRetriever;
use crate::document::RetrievedDocument;
use crate::error::Result;

/// Fetch documents relevant to a query, suspending while the request is in
/// flight.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Retrieve the chunks relevant to `query`, in service order.
    async fn retrieve(&self, query: &str) -> Result<Vec<RetrievedDocument>>;
}

/// Fetch documents relevant to a query, blocking the calling thread.
pub trait BlockingRetriever: Send + Sync {
    /// Retrieve the chunks relevant to `query`, in service order.
    fn retrieve_blocking(&self, query: &str) -> Result<Vec<RetrievedDocument>>;
}

#[async_trait]
impl Retriever for CredalRetriever {
    async fn retrieve(&self, query: &str) -> Result<Vec<RetrievedDocument>> {
        CredalRetriever::retrieve(self, query).await
    }
}

impl BlockingRetriever for CredalRetriever {
    fn retrieve_blocking(&self, query: &str) -> Result<Vec<RetrievedDocument>> {
        CredalRetriever::retrieve_blocking(self, query)
    }
}
