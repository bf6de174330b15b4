//! Synthesizer — grounded answer generation.

use std::sync::Arc;

use ragnar_core::error::LlmError;
use ragnar_core::llm::LanguageModel;
use tracing::info;

/// Produces the final answer from the assembled context and the original
/// query.
pub struct Synthesizer {
    llm: Arc<dyn LanguageModel>,
}

impl Synthesizer {
    /// Create a synthesizer over a language model.
    pub fn new(llm: Arc<dyn LanguageModel>) -> Self {
        Self { llm }
    }

    /// Generate an answer grounded in `context`.
    ///
    /// The prompt instructs the model to answer strictly from the
    /// supplied context and to say so when the context is insufficient.
    /// That instruction is a behavioral contract the model is trusted to
    /// honor; there is no post-hoc grounding verification.
    pub async fn answer(&self, query: &str, context: &str) -> Result<String, LlmError> {
        let prompt = build_prompt(query, context);
        let raw = self.llm.generate(&prompt).await?;
        let answer = raw.trim().to_string();

        info!(answer_len = answer.len(), "Answer synthesized");
        Ok(answer)
    }
}

fn build_prompt(query: &str, context: &str) -> String {
    format!(
        "Answer the question using ONLY the context below. If the context \
         does not contain enough information to answer, say so explicitly.\n\
         \n\
         Context:\n\
         {context}\n\
         \n\
         Question: {query}\n\
         \n\
         Answer:"
    )
}
