//! Planner — decomposes a query into ordered sub-questions.

use std::sync::Arc;

use ragnar_core::error::LlmError;
use ragnar_core::llm::LanguageModel;
use tracing::{debug, info};

/// Decomposes one user query into the minimal set of sub-questions
/// needed to answer it, via the language model port.
pub struct Planner {
    llm: Arc<dyn LanguageModel>,
}

impl Planner {
    /// Create a planner over a language model.
    pub fn new(llm: Arc<dyn LanguageModel>) -> Self {
        Self { llm }
    }

    /// Decompose `query` into an ordered, non-empty list of sub-questions.
    ///
    /// The model is asked to echo a simple query unchanged, or split a
    /// complex one into minimal sub-questions, one per line. If parsing
    /// the model output yields nothing usable, the original query is
    /// returned as the single sub-question — decomposition never yields
    /// an empty list. A port failure propagates; there is no retry here.
    pub async fn decompose(&self, query: &str) -> Result<Vec<String>, LlmError> {
        let prompt = build_prompt(query);
        let raw = self.llm.generate(&prompt).await?;

        let mut sub_questions = parse_sub_questions(&raw);
        if sub_questions.is_empty() {
            debug!("Planner output was empty, falling back to the original query");
            sub_questions.push(query.to_string());
        }

        info!(count = sub_questions.len(), "Query decomposed");
        Ok(sub_questions)
    }
}

fn build_prompt(query: &str) -> String {
    format!(
        "Decompose the following question into minimal logical sub-questions \
         needed to answer it correctly.\n\
         \n\
         Question: {query}\n\
         \n\
         Return each sub-question on a new line.\n\
         If the question is simple, return it as a single line.\n\
         Do not add any explanation or numbering."
    )
}

/// Split model output into sub-questions: one per line, trimmed, with a
/// single leading bullet/dash marker stripped, empties discarded.
fn parse_sub_questions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix(['-', '*', '•'])
                .map(str::trim_start)
                .unwrap_or(line)
        })
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{FailingLlm, ScriptedLlm};

    #[tokio::test]
    async fn simple_query_passes_through() {
        let planner = Planner::new(Arc::new(ScriptedLlm::single("What is Rust?")));
        let subs = planner.decompose("What is Rust?").await.unwrap();
        assert_eq!(subs, vec!["What is Rust?".to_string()]);
    }

    #[tokio::test]
    async fn multi_line_output_preserves_order() {
        let planner = Planner::new(Arc::new(ScriptedLlm::single(
            "What is RAG?\nWhat makes RAG agentic?",
        )));
        let subs = planner.decompose("What is agentic RAG?").await.unwrap();
        assert_eq!(
            subs,
            vec![
                "What is RAG?".to_string(),
                "What makes RAG agentic?".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn bullet_markers_are_stripped() {
        let planner = Planner::new(Arc::new(ScriptedLlm::single(
            "- first question\n* second question\n• third question",
        )));
        let subs = planner.decompose("q").await.unwrap();
        assert_eq!(
            subs,
            vec![
                "first question".to_string(),
                "second question".to_string(),
                "third question".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn blank_output_falls_back_to_the_original_query() {
        let planner = Planner::new(Arc::new(ScriptedLlm::single("  \n\n   \n")));
        let subs = planner.decompose("the original").await.unwrap();
        assert_eq!(subs, vec!["the original".to_string()]);
    }

    #[tokio::test]
    async fn marker_only_lines_are_discarded() {
        let planner = Planner::new(Arc::new(ScriptedLlm::single("-\nreal question\n- ")));
        let subs = planner.decompose("q").await.unwrap();
        assert_eq!(subs, vec!["real question".to_string()]);
    }

    #[tokio::test]
    async fn port_failure_propagates() {
        let planner = Planner::new(Arc::new(FailingLlm));
        let err = planner.decompose("q").await.unwrap_err();
        assert!(matches!(err, LlmError::Network(_)));
    }

    #[test]
    fn parsing_never_yields_blank_entries() {
        let parsed = parse_sub_questions("  - one \n\n \t \n* two\n");
        assert_eq!(parsed, vec!["one".to_string(), "two".to_string()]);
        assert!(parsed.iter().all(|s| !s.trim().is_empty()));
    }
}
