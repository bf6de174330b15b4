//! Evidence aggregation — retrieve per sub-question, deduplicate, assemble.

use std::collections::HashSet;
use std::sync::Arc;

use ragnar_core::document::Document;
use ragnar_core::error::RetrievalError;
use ragnar_core::retriever::Retriever;
use ragnar_core::trace::Step;
use tracing::{debug, info};

/// Context value used when retrieval produced nothing.
///
/// Never the empty string — downstream prompting always gets well-formed
/// input.
pub const NO_EVIDENCE: &str = "No supporting evidence was retrieved.";

/// Separator between passages in the assembled context.
const CONTEXT_SEPARATOR: &str = "\n\n";

/// The deduplicated evidence for one run, plus the retrieval trace
/// fragment that produced it.
#[derive(Debug)]
pub struct Evidence {
    /// Unique documents in first-seen order across sub-questions.
    pub documents: Vec<Document>,

    /// One `Retrieval` step per sub-question, in sub-question order.
    pub steps: Vec<Step>,
}

impl Evidence {
    /// Join the unique document contents into a single context string.
    pub fn context(&self) -> String {
        if self.documents.is_empty() {
            return NO_EVIDENCE.to_string();
        }
        self.documents
            .iter()
            .map(|d| d.content.as_str())
            .collect::<Vec<_>>()
            .join(CONTEXT_SEPARATOR)
    }
}

/// Issues one retrieval per sub-question and merges the results.
pub struct EvidenceAggregator {
    retriever: Arc<dyn Retriever>,
    top_k: usize,
}

impl EvidenceAggregator {
    /// Create an aggregator requesting up to `top_k` documents per
    /// sub-question.
    pub fn new(retriever: Arc<dyn Retriever>, top_k: usize) -> Self {
        Self { retriever, top_k }
    }

    /// Retrieve evidence for every sub-question, in sequence order.
    ///
    /// Each retrieval appends a `Retrieval { sub_question, doc_count }`
    /// step whether or not documents came back. Documents are merged in
    /// sub-question order (rank order within), then deduplicated by exact
    /// content equality — first occurrence wins, no normalization and no
    /// semantic merging of near-duplicates.
    ///
    /// A retriever failure for any sub-question aborts the whole run.
    pub async fn gather(&self, sub_questions: &[String]) -> Result<Evidence, RetrievalError> {
        let mut documents: Vec<Document> = Vec::new();
        let mut steps = Vec::with_capacity(sub_questions.len());
        let mut seen: HashSet<String> = HashSet::new();

        for sub_question in sub_questions {
            let retrieved = self.retriever.search(sub_question, self.top_k).await?;
            debug!(sub_question = %sub_question, count = retrieved.len(), "Sub-question retrieved");

            steps.push(Step::Retrieval {
                sub_question: sub_question.clone(),
                doc_count: retrieved.len(),
            });

            for doc in retrieved {
                if seen.insert(doc.content.clone()) {
                    documents.push(doc);
                }
            }
        }

        info!(
            sub_questions = sub_questions.len(),
            unique_documents = documents.len(),
            "Evidence gathered"
        );

        Ok(Evidence { documents, steps })
    }
}
