//! OpenAI-compatible provider implementation.
//!
//! Works with: OpenAI, OpenRouter, Ollama, vLLM, Together AI, and any
//! OpenAI-compatible endpoint.
//!
//! Implements both ports the pipeline needs:
//! - `LanguageModel` via `/chat/completions` (non-streaming)
//! - `Embedder` via `/embeddings`

use async_trait::async_trait;
use ragnar_core::error::LlmError;
use ragnar_core::llm::{Embedder, LanguageModel};
use serde::Deserialize;
use tracing::{debug, warn};

/// An OpenAI-compatible client.
///
/// This handles the vast majority of hosted and local model servers since
/// most expose an OpenAI-compatible `/v1` surface.
pub struct OpenAiCompatClient {
    name: String,
    base_url: String,
    api_key: String,
    chat_model: String,
    embedding_model: String,
    temperature: f32,
    max_tokens: u32,
    client: reqwest::Client,
}

impl OpenAiCompatClient {
    /// Create a new OpenAI-compatible client.
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .unwrap_or_default();

        Self {
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            chat_model: "gpt-4o-mini".into(),
            embedding_model: "text-embedding-3-small".into(),
            temperature: 0.0,
            max_tokens: 1024,
            client,
        }
    }

    /// Create an OpenAI client (convenience constructor).
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self::new("openai", "https://api.openai.com/v1", api_key)
    }

    /// Create an OpenRouter client (convenience constructor).
    pub fn openrouter(api_key: impl Into<String>) -> Self {
        Self::new("openrouter", "https://openrouter.ai/api/v1", api_key)
    }

    /// Create an Ollama client (convenience constructor).
    pub fn ollama(base_url: Option<&str>) -> Self {
        Self::new(
            "ollama",
            base_url.unwrap_or("http://localhost:11434/v1"),
            "ollama", // Ollama doesn't need a real key
        )
    }

    /// Set the chat model (builder style).
    pub fn with_chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = model.into();
        self
    }

    /// Set the embedding model (builder style).
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }

    /// Set the sampling temperature (builder style).
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the response token cap (builder style).
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Map a non-200 status to the matching error variant.
    fn status_error(status: u16, body: String) -> LlmError {
        match status {
            429 => LlmError::RateLimited {
                retry_after_secs: 5,
            },
            401 | 403 => LlmError::AuthenticationFailed(
                "Invalid API key or insufficient permissions".into(),
            ),
            _ => LlmError::Api {
                status_code: status,
                message: body,
            },
        }
    }

    fn request_error(e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            LlmError::Timeout(e.to_string())
        } else {
            LlmError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl LanguageModel for OpenAiCompatClient {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = serde_json::json!({
            "model": self.chat_model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
            "stream": false,
        });

        debug!(provider = %self.name, model = %self.chat_model, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(Self::request_error)?;

        let status = response.status().as_u16();
        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Provider returned error");
            return Err(Self::status_error(status, error_body));
        }

        let api_response: ChatResponse =
            response.json().await.map_err(|e| LlmError::Api {
                status_code: 200,
                message: format!("Failed to parse response: {e}"),
            })?;

        if let Some(usage) = &api_response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Completion usage"
            );
        }

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::Api {
                status_code: 200,
                message: "No choices in response".into(),
            })?;

        choice.message.content.ok_or_else(|| LlmError::Api {
            status_code: 200,
            message: "Response message had no content".into(),
        })
    }
}

#[async_trait]
impl Embedder for OpenAiCompatClient {
    fn name(&self) -> &str {
        &self.name
    }

    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, LlmError> {
        let url = format!("{}/embeddings", self.base_url);

        let body = serde_json::json!({
            "model": self.embedding_model,
            "input": texts,
            "encoding_format": "float",
        });

        debug!(
            provider = %self.name,
            model = %self.embedding_model,
            count = texts.len(),
            "Sending embedding request"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(Self::request_error)?;

        let status = response.status().as_u16();
        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, error_body));
        }

        let api_response: EmbeddingResponse =
            response.json().await.map_err(|e| LlmError::Api {
                status_code: 200,
                message: format!("Failed to parse embedding response: {e}"),
            })?;

        Ok(api_response.data.into_iter().map(|d| d.embedding).collect())
    }
}

// --- OpenAI API types (internal) ---

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openai_constructor() {
        let client = OpenAiCompatClient::openai("sk-test");
        assert_eq!(LanguageModel::name(&client), "openai");
        assert!(client.base_url.contains("api.openai.com"));
    }

    #[test]
    fn ollama_constructor() {
        let client = OpenAiCompatClient::ollama(None);
        assert_eq!(LanguageModel::name(&client), "ollama");
        assert!(client.base_url.contains("localhost:11434"));
    }

    #[test]
    fn builder_overrides_models() {
        let client = OpenAiCompatClient::openrouter("sk-test")
            .with_chat_model("meta-llama/llama-3-8b")
            .with_embedding_model("nomic-embed-text")
            .with_temperature(0.3)
            .with_max_tokens(512);
        assert_eq!(client.chat_model, "meta-llama/llama-3-8b");
        assert_eq!(client.embedding_model, "nomic-embed-text");
        assert!((client.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(client.max_tokens, 512);
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = OpenAiCompatClient::new("x", "http://host/v1/", "key");
        assert_eq!(client.base_url, "http://host/v1");
    }

    #[test]
    fn status_mapping() {
        assert!(matches!(
            OpenAiCompatClient::status_error(429, String::new()),
            LlmError::RateLimited { .. }
        ));
        assert!(matches!(
            OpenAiCompatClient::status_error(401, String::new()),
            LlmError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            OpenAiCompatClient::status_error(500, String::new()),
            LlmError::Api {
                status_code: 500,
                ..
            }
        ));
    }

    #[test]
    fn parse_chat_response() {
        let data = r#"{
            "choices": [{"message": {"role": "assistant", "content": "Paris."}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 2, "total_tokens": 14}
        }"#;
        let parsed: ChatResponse = serde_json::from_str(data).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Paris.")
        );
        assert_eq!(parsed.usage.unwrap().prompt_tokens, 12);
    }

    #[test]
    fn parse_chat_response_without_content() {
        let data = r#"{"choices": [{"message": {"role": "assistant"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(data).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }

    #[test]
    fn parse_embedding_response() {
        let data = r#"{
            "data": [
                {"embedding": [0.1, 0.2, 0.3], "index": 0},
                {"embedding": [0.4, 0.5, 0.6], "index": 1}
            ],
            "model": "text-embedding-3-small"
        }"#;
        let parsed: EmbeddingResponse = serde_json::from_str(data).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].embedding, vec![0.1, 0.2, 0.3]);
    }
}
