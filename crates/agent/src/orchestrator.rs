//! The orchestrator — sequences the whole pipeline.
//!
//! One invocation is a linear state machine with no branching and no
//! loops back: normalize → plan → retrieve → answer. Any component
//! failure short-circuits to the caller as a typed error; there is no
//! retry transition.

use std::sync::Arc;

use ragnar_core::error::Error;
use ragnar_core::input::AgentInput;
use ragnar_core::llm::LanguageModel;
use ragnar_core::retriever::Retriever;
use ragnar_core::trace::{AgentResult, Step, Trace};
use tracing::info;

use crate::evidence::EvidenceAggregator;
use crate::planner::Planner;
use crate::synthesizer::Synthesizer;

/// Documents requested per sub-question when not overridden.
const DEFAULT_TOP_K: usize = 3;

/// The agentic RAG pipeline.
///
/// Holds nothing between invocations beyond the two port references it
/// was constructed with; every run builds its own result and trace.
pub struct Agent {
    llm: Arc<dyn LanguageModel>,
    retriever: Arc<dyn Retriever>,
    top_k: usize,
}

impl Agent {
    /// Create an agent over the two capability ports.
    pub fn new(llm: Arc<dyn LanguageModel>, retriever: Arc<dyn Retriever>) -> Self {
        Self {
            llm,
            retriever,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Override how many documents are retrieved per sub-question.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Run one query through the pipeline.
    ///
    /// Accepts a bare string or a `messages` conversation (the last
    /// message's content is the query). Returns the synthesized answer
    /// together with the full step trace: exactly one `Planning` step,
    /// one `Retrieval` step per sub-question, and one `Answer` step, in
    /// that order.
    pub async fn invoke(&self, input: impl Into<AgentInput>) -> Result<AgentResult, Error> {
        let input = input.into();
        let query = input.query()?.to_string();
        info!(query = %query, "Pipeline started");

        let mut steps = Trace::new();

        // ── Plan ──
        let planner = Planner::new(self.llm.clone());
        let sub_questions = planner.decompose(&query).await?;
        steps.push(Step::Planning {
            sub_questions: sub_questions.clone(),
        });

        // ── Retrieve ──
        let aggregator = EvidenceAggregator::new(self.retriever.clone(), self.top_k);
        let evidence = aggregator.gather(&sub_questions).await?;
        for step in evidence.steps.iter().cloned() {
            steps.push(step);
        }
        let context = evidence.context();

        // ── Answer ──
        let synthesizer = Synthesizer::new(self.llm.clone());
        let answer = synthesizer.answer(&query, &context).await?;
        steps.push(Step::Answer {
            answer: answer.clone(),
        });

        info!(steps = steps.len(), "Pipeline finished");
        Ok(AgentResult { answer, steps })
    }

    /// Run a raw JSON value through the pipeline.
    ///
    /// Shapes other than a string or a `{"messages": [...]}` object fail
    /// with an input error before any port is called.
    pub async fn invoke_value(&self, value: serde_json::Value) -> Result<AgentResult, Error> {
        let input = AgentInput::try_from(value)?;
        self.invoke(input).await
    }
}
