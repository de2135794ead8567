//! Storage abstractions for service layer
//!
//! Each collection is persisted as a single JSON document; the store reads
//! and writes it whole.

pub mod document_store;

pub use document_store::{JsonDocumentStore, StoreError};
