//! # credal-retriever
//!
//! Retrieval client for the [Credal.ai](https://www.credal.ai) document-search
//! API.
//!
//! ## Overview
//!
//! Given a natural-language query, [`CredalRetriever`] calls
//! `POST /api/v0/search/searchDocumentCollection` and flattens the nested
//! response into a flat list of [`RetrievedDocument`]s — one per chunk, in
//! the exact order the service returned them — for consumption by a
//! downstream retrieval pipeline. Both a suspendable ([`Retriever`]) and a
//! blocking ([`BlockingRetriever`]) call path are provided; they share the
//! same payload-building and flattening logic and produce identical output
//! for the same response body.
//!
//! The client performs no caching, retries, or rate limiting: every failure
//! propagates to the caller as a [`RetrieverError`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use credal_retriever::{CredalConfig, CredalRetriever};
//!
//! # async fn run() -> credal_retriever::Result<()> {
//! let config = CredalConfig::builder()
//!     .document_collection_id("col_abc123")
//!     .api_key(std::env::var("CREDAL_API_KEY").unwrap())
//!     .max_chunks(10)
//!     .build()?;
//!
//! let retriever = CredalRetriever::new(config);
//! for doc in retriever.retrieve("vacation policy").await? {
//!     println!("{}: {}", doc.metadata["chunk_id"], doc.content);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod retriever;

pub use client::CredalRetriever;
pub use config::{CredalConfig, CredalConfigBuilder, DEFAULT_BASE_URL};
pub use document::RetrievedDocument;
pub use error::{Result, RetrieverError};
pub use retriever::{BlockingRetriever, Retriever};
