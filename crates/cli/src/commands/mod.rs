//! CLI subcommands.

pub mod ask;
pub mod eval;
pub mod ingest;

use std::sync::Arc;

use ragnar_agent::Agent;
use ragnar_config::AppConfig;
use ragnar_index::{IndexRetriever, VectorStore};
use ragnar_providers::OpenAiCompatClient;

/// Fail fast with setup instructions when no credential is configured.
pub(crate) fn ensure_api_key(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    if config.api_key.is_some() {
        return Ok(());
    }

    eprintln!();
    eprintln!("  ERROR: No API key configured!");
    eprintln!();
    eprintln!("  Set one of these environment variables:");
    eprintln!("    OPENAI_API_KEY      (for OpenAI direct)");
    eprintln!("    OPENROUTER_API_KEY  (for OpenRouter)");
    eprintln!("    RAGNAR_API_KEY      (generic)");
    eprintln!();
    eprintln!("  Or add it to your config file:");
    eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
    eprintln!();
    Err("No API key found. See above for setup instructions.".into())
}

/// Build the provider client shared by both ports.
pub(crate) fn build_client(config: &AppConfig) -> Arc<OpenAiCompatClient> {
    Arc::new(ragnar_providers::build_from_config(config))
}

/// Load the persisted index and assemble the agent over it.
pub(crate) fn build_agent(
    config: &AppConfig,
    client: Arc<OpenAiCompatClient>,
) -> Result<Agent, Box<dyn std::error::Error>> {
    let store = VectorStore::load(&config.index.path).map_err(|e| {
        format!("{e}\n  Hint: build the index first with `ragnar ingest`")
    })?;

    let retriever = Arc::new(IndexRetriever::new(store, client.clone()));
    Ok(Agent::new(client, retriever).with_top_k(config.index.top_k))
}
