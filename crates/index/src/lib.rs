//! Semantic index for ragnar.
//!
//! The ingestion side loads `.txt` documents, chunks them, embeds the
//! chunks, and persists the result as JSONL. The query side implements
//! the `ragnar_core::Retriever` port over the persisted store via cosine
//! similarity on query embeddings.

pub mod chunker;
pub mod ingest;
pub mod loader;
pub mod retriever;
pub mod store;
pub mod vector;

pub use chunker::Chunker;
pub use ingest::build_index;
pub use loader::{load_documents, SourceDocument};
pub use retriever::IndexRetriever;
pub use store::{IndexedChunk, VectorStore};
pub use vector::cosine_similarity;
