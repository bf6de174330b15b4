//! The `Retriever` port implementation over the vector store.
//!
//! Embeds the query via the `Embedder` port, then ranks stored chunks by
//! cosine similarity.

use std::sync::Arc;

use async_trait::async_trait;
use ragnar_core::document::Document;
use ragnar_core::error::RetrievalError;
use ragnar_core::llm::Embedder;
use ragnar_core::retriever::Retriever;
use tracing::debug;

use crate::store::VectorStore;

/// A semantic retriever backed by a [`VectorStore`].
pub struct IndexRetriever {
    store: VectorStore,
    embedder: Arc<dyn Embedder>,
}

impl IndexRetriever {
    /// Create a retriever over a loaded store.
    pub fn new(store: VectorStore, embedder: Arc<dyn Embedder>) -> Self {
        Self { store, embedder }
    }

    /// Number of chunks available for retrieval.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the underlying store is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[async_trait]
impl Retriever for IndexRetriever {
    fn name(&self) -> &str {
        "vector_index"
    }

    async fn search(&self, query: &str, k: usize) -> Result<Vec<Document>, RetrievalError> {
        let embeddings = self
            .embedder
            .embed(&[query.to_string()])
            .await
            .map_err(|e| RetrievalError::Embedding(e.to_string()))?;

        let query_embedding = embeddings
            .into_iter()
            .next()
            .ok_or_else(|| RetrievalError::Embedding("embedder returned no vector".into()))?;

        let docs = self.store.search_embedding(&query_embedding, k);
        debug!(query, k, found = docs.len(), "Index searched");
        Ok(docs)
    }
}
