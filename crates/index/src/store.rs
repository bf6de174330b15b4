//! The persisted vector store.
//!
//! Chunks are held in memory and flushed to disk as JSONL (one
//! JSON-encoded `IndexedChunk` per line). Simple, portable,
//! human-inspectable, and requires no database.

use std::path::Path;

use chrono::{DateTime, Utc};
use ragnar_core::document::Document;
use ragnar_core::error::RetrievalError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::vector::cosine_similarity;

/// One embedded chunk of one source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedChunk {
    /// Unique chunk ID.
    pub id: String,

    /// The chunk text.
    pub content: String,

    /// Name of the source document this chunk came from.
    pub source: String,

    /// Position of this chunk within its source document.
    pub seq: usize,

    /// When this chunk was indexed.
    pub indexed_at: DateTime<Utc>,

    /// The embedding vector.
    pub embedding: Vec<f32>,
}

/// An in-memory vector store with JSONL persistence.
#[derive(Debug, Default)]
pub struct VectorStore {
    chunks: Vec<IndexedChunk>,
}

impl VectorStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    /// Add a chunk.
    pub fn push(&mut self, chunk: IndexedChunk) {
        self.chunks.push(chunk);
    }

    /// Number of indexed chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the store holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Load a store from a JSONL file.
    ///
    /// Corrupted lines are skipped with a warning; a missing file is an
    /// error (the index must be built before it can be queried).
    pub fn load(path: &Path) -> Result<Self, RetrievalError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RetrievalError::Index(format!("failed to read index {}: {e}", path.display()))
        })?;

        let chunks: Vec<IndexedChunk> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match serde_json::from_str::<IndexedChunk>(line) {
                Ok(chunk) => Some(chunk),
                Err(e) => {
                    warn!(error = %e, "Skipping corrupted index entry");
                    None
                }
            })
            .collect();

        debug!(path = %path.display(), count = chunks.len(), "Index loaded");
        Ok(Self { chunks })
    }

    /// Flush the store to a JSONL file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), RetrievalError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RetrievalError::Index(format!("failed to create index directory: {e}"))
            })?;
        }

        let mut content = String::new();
        for chunk in &self.chunks {
            let line = serde_json::to_string(chunk).map_err(|e| {
                RetrievalError::Index(format!("failed to serialize index entry: {e}"))
            })?;
            content.push_str(&line);
            content.push('\n');
        }

        std::fs::write(path, &content).map_err(|e| {
            RetrievalError::Index(format!("failed to write index {}: {e}", path.display()))
        })?;

        debug!(path = %path.display(), count = self.chunks.len(), "Index saved");
        Ok(())
    }

    /// Rank chunks by cosine similarity to a query embedding and return
    /// the best `k` as [`Document`]s, best-first.
    pub fn search_embedding(&self, query_embedding: &[f32], k: usize) -> Vec<Document> {
        let mut scored: Vec<(f32, &IndexedChunk)> = self
            .chunks
            .iter()
            .map(|chunk| (cosine_similarity(&chunk.embedding, query_embedding), chunk))
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);

        scored
            .into_iter()
            .map(|(score, chunk)| {
                Document::new(&chunk.content)
                    .with_metadata("id", serde_json::json!(chunk.id))
                    .with_metadata("source", serde_json::json!(chunk.source))
                    .with_metadata("chunk", serde_json::json!(chunk.seq))
                    .with_score(score)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(id: &str, content: &str, embedding: Vec<f32>) -> IndexedChunk {
        IndexedChunk {
            id: id.into(),
            content: content.into(),
            source: "test.txt".into(),
            seq: 0,
            indexed_at: Utc::now(),
            embedding,
        }
    }

    #[test]
    fn search_ranks_by_similarity() {
        let mut store = VectorStore::new();
        store.push(chunk("a", "orthogonal", vec![0.0, 1.0, 0.0]));
        store.push(chunk("b", "identical", vec![1.0, 0.0, 0.0]));
        store.push(chunk("c", "partial", vec![0.5, 0.5, 0.0]));

        let docs = store.search_embedding(&[1.0, 0.0, 0.0], 10);
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].content, "identical");
        assert_eq!(docs[1].content, "partial");
        assert_eq!(docs[2].content, "orthogonal");
        assert!(docs[0].score > docs[1].score);
    }

    #[test]
    fn search_honors_k() {
        let mut store = VectorStore::new();
        for i in 0..10 {
            store.push(chunk(&format!("c{i}"), "text", vec![1.0, i as f32 * 0.1]));
        }
        assert_eq!(store.search_embedding(&[1.0, 0.0], 3).len(), 3);
    }

    #[test]
    fn search_on_empty_store_is_empty() {
        assert!(VectorStore::new().search_embedding(&[1.0], 5).is_empty());
    }

    #[test]
    fn documents_carry_source_metadata() {
        let mut store = VectorStore::new();
        store.push(chunk("a", "passage", vec![1.0]));

        let docs = store.search_embedding(&[1.0], 1);
        assert_eq!(docs[0].metadata["source"], "test.txt");
        assert_eq!(docs[0].metadata["chunk"], 0);
    }

    #[test]
    fn persistence_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store").join("index.jsonl");

        let mut store = VectorStore::new();
        store.push(chunk("a", "first", vec![1.0, 0.0]));
        store.push(chunk("b", "second", vec![0.0, 1.0]));
        store.save(&path).unwrap();

        let loaded = VectorStore::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        let docs = loaded.search_embedding(&[1.0, 0.0], 1);
        assert_eq!(docs[0].content, "first");
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = VectorStore::load(Path::new("/no/such/index.jsonl")).unwrap_err();
        assert!(matches!(err, RetrievalError::Index(_)));
    }

    #[test]
    fn load_skips_corrupted_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.jsonl");

        let mut store = VectorStore::new();
        store.push(chunk("a", "good", vec![1.0]));
        store.save(&path).unwrap();

        let mut content = std::fs::read_to_string(&path).unwrap();
        content.push_str("{not json}\n");
        std::fs::write(&path, content).unwrap();

        let loaded = VectorStore::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
    }
}
