//! Index building — load, chunk, embed, assemble.

use std::path::Path;

use chrono::Utc;
use ragnar_core::error::{Error, RetrievalError};
use ragnar_core::llm::Embedder;
use tracing::info;
use uuid::Uuid;

use crate::chunker::Chunker;
use crate::loader::load_documents;
use crate::store::{IndexedChunk, VectorStore};

/// Embedding requests are batched to keep payloads bounded.
const EMBED_BATCH: usize = 64;

/// Build a vector store from every `.txt` document under `data_dir`.
///
/// Chunks each document, embeds the chunks in batches through the
/// `Embedder` port, and assembles the store in document order. The
/// caller decides where (and whether) to persist it.
pub async fn build_index(
    data_dir: &Path,
    chunker: &Chunker,
    embedder: &dyn Embedder,
) -> Result<VectorStore, Error> {
    let documents = load_documents(data_dir)?;
    info!(documents = documents.len(), dir = %data_dir.display(), "Ingesting documents");

    // (source, seq, content) for every chunk, in document order
    let mut pending: Vec<(String, usize, String)> = Vec::new();
    for doc in &documents {
        for (seq, content) in chunker.chunk(&doc.content).into_iter().enumerate() {
            pending.push((doc.name.clone(), seq, content));
        }
    }

    let mut store = VectorStore::new();
    for batch in pending.chunks(EMBED_BATCH) {
        let texts: Vec<String> = batch.iter().map(|(_, _, c)| c.clone()).collect();
        let embeddings = embedder.embed(&texts).await?;

        if embeddings.len() != batch.len() {
            return Err(RetrievalError::Embedding(format!(
                "embedder returned {} vectors for {} inputs",
                embeddings.len(),
                batch.len()
            ))
            .into());
        }

        for ((source, seq, content), embedding) in batch.iter().zip(embeddings) {
            store.push(IndexedChunk {
                id: Uuid::new_v4().to_string(),
                content: content.clone(),
                source: source.clone(),
                seq: *seq,
                indexed_at: Utc::now(),
                embedding,
            });
        }
    }

    info!(chunks = store.len(), "Index built");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ragnar_core::error::LlmError;

    /// Embeds every text as a constant vector; counts calls.
    struct ConstEmbedder;

    #[async_trait]
    impl Embedder for ConstEmbedder {
        fn name(&self) -> &str {
            "const"
        }

        async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, LlmError> {
            Ok(texts.iter().map(|_| vec![1.0, 0.0]).collect())
        }
    }

    /// Always returns the wrong number of vectors.
    struct BrokenEmbedder;

    #[async_trait]
    impl Embedder for BrokenEmbedder {
        fn name(&self) -> &str {
            "broken"
        }

        async fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, LlmError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn builds_a_store_from_txt_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("one.txt"), "First document text.").unwrap();
        std::fs::write(dir.path().join("two.txt"), "Second document text.").unwrap();

        let store = build_index(dir.path(), &Chunker::default(), &ConstEmbedder)
            .await
            .unwrap();
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn long_documents_become_multiple_chunks() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("long.txt"), "sentence. ".repeat(400)).unwrap();

        let store = build_index(dir.path(), &Chunker::new(100, 20), &ConstEmbedder)
            .await
            .unwrap();
        assert!(store.len() > 1);
    }

    #[tokio::test]
    async fn vector_count_mismatch_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("doc.txt"), "Some text.").unwrap();

        let err = build_index(dir.path(), &Chunker::default(), &BrokenEmbedder)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Retrieval(RetrievalError::Embedding(_))
        ));
    }

    #[tokio::test]
    async fn missing_data_dir_is_an_error() {
        let err = build_index(Path::new("/nope"), &Chunker::default(), &ConstEmbedder)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Retrieval(RetrievalError::Index(_))));
    }
}
