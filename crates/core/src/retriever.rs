//! Retriever trait — the abstraction over the semantic index.
//!
//! The pipeline consumes only this search contract; how the index is
//! built, embedded, and persisted is the index crate's concern.

use async_trait::async_trait;

use crate::document::Document;
use crate::error::RetrievalError;

/// The retriever port.
///
/// `search` returns documents ranked best-first, between 0 and `k`
/// inclusive. An empty result is a valid outcome, not an error.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// A human-readable name for this backend (e.g., "vector_index").
    fn name(&self) -> &str;

    /// Return up to `k` documents relevant to `query`, ranked best-first.
    async fn search(
        &self,
        query: &str,
        k: usize,
    ) -> std::result::Result<Vec<Document>, RetrievalError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<Document>);

    #[async_trait]
    impl Retriever for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn search(
            &self,
            _query: &str,
            k: usize,
        ) -> std::result::Result<Vec<Document>, RetrievalError> {
            Ok(self.0.iter().take(k).cloned().collect())
        }
    }

    #[tokio::test]
    async fn search_honors_k() {
        let retriever = Fixed(vec![
            Document::new("a"),
            Document::new("b"),
            Document::new("c"),
        ]);
        let docs = retriever.search("anything", 2).await.unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].content, "a");
    }
}
