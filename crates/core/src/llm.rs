//! LanguageModel and Embedder traits — the abstraction over model backends.
//!
//! A LanguageModel knows how to turn a text prompt into generated text;
//! an Embedder turns texts into vectors. The pipeline calls `generate()`
//! without knowing which backend is in use — pure polymorphism.
//!
//! Implementations: OpenAI-compatible endpoints (OpenAI, OpenRouter,
//! Ollama, vLLM), plus scripted mocks in tests.

use async_trait::async_trait;

use crate::error::LlmError;

/// The language model port: plain text in, generated text out.
///
/// No streaming and no structured output — the planner and synthesizer
/// both work on raw text. Failures are reported as [`LlmError`]; the
/// pipeline does not retry.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// A human-readable name for this backend (e.g., "openai", "ollama").
    fn name(&self) -> &str;

    /// Submit a prompt and return the generated text.
    async fn generate(&self, prompt: &str) -> std::result::Result<String, LlmError>;
}

/// The embedding port used by ingestion and retrieval.
///
/// Returns one vector per input text, in input order.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// A human-readable name for this backend.
    fn name(&self) -> &str;

    /// Embed the given texts.
    async fn embed(&self, texts: &[String]) -> std::result::Result<Vec<Vec<f32>>, LlmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl LanguageModel for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(&self, prompt: &str) -> std::result::Result<String, LlmError> {
            Ok(prompt.to_string())
        }
    }

    #[tokio::test]
    async fn trait_is_object_safe() {
        let llm: Box<dyn LanguageModel> = Box::new(Echo);
        assert_eq!(llm.name(), "echo");
        assert_eq!(llm.generate("ping").await.unwrap(), "ping");
    }
}
