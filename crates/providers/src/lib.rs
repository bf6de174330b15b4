//! Model provider implementations for ragnar.
//!
//! Providers implement the `ragnar_core::LanguageModel` and
//! `ragnar_core::Embedder` port traits.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatClient;

use ragnar_config::AppConfig;

/// Build the provider client described by the configuration.
///
/// The API key must already be validated as present by the caller;
/// a missing key is substituted with an empty string and will surface
/// as an authentication failure on first use.
pub fn build_from_config(config: &AppConfig) -> OpenAiCompatClient {
    OpenAiCompatClient::new(
        &config.provider,
        &config.api_url,
        config.api_key.clone().unwrap_or_default(),
    )
    .with_chat_model(&config.chat_model)
    .with_embedding_model(&config.embedding_model)
    .with_temperature(config.temperature)
    .with_max_tokens(config.max_tokens)
}
