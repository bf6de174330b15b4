//! Configuration loading, validation, and management for ragnar.
//!
//! Loads configuration from `~/.ragnar/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Failed to parse config file: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// The root configuration structure.
///
/// Maps directly to `~/.ragnar/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key for the model provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Provider name (display only)
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Chat model used for planning and synthesis
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Embedding model used for ingestion and retrieval
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,

    /// Sampling temperature for planning and synthesis
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens per generated response
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Index building and retrieval settings
    #[serde(default)]
    pub index: IndexConfig,

    /// Evaluation harness settings
    #[serde(default)]
    pub eval: EvalConfig,
}

fn default_api_url() -> String {
    "https://api.openai.com/v1".into()
}
fn default_provider() -> String {
    "openai".into()
}
fn default_chat_model() -> String {
    "gpt-4o-mini".into()
}
fn default_embedding_model() -> String {
    "text-embedding-3-small".into()
}
fn default_temperature() -> f32 {
    0.0
}
fn default_max_tokens() -> u32 {
    1024
}

/// Settings for building and querying the semantic index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Directory scanned for `.txt` source documents
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Where the persisted index lives
    #[serde(default = "default_index_path")]
    pub path: PathBuf,

    /// Target chunk size in characters
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Overlap between consecutive chunks in characters
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,

    /// Documents retrieved per sub-question
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_index_path() -> PathBuf {
    PathBuf::from("vectorstore").join("index.jsonl")
}
fn default_chunk_size() -> usize {
    1000
}
fn default_chunk_overlap() -> usize {
    200
}
fn default_top_k() -> usize {
    3
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            path: default_index_path(),
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
            top_k: default_top_k(),
        }
    }
}

/// Settings for the offline evaluation harness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    /// JSON file of `{question, ground_truth}` rows
    #[serde(default = "default_eval_dataset")]
    pub dataset: PathBuf,

    /// Where per-row results are written
    #[serde(default = "default_eval_results")]
    pub results: PathBuf,
}

fn default_eval_dataset() -> PathBuf {
    PathBuf::from("data").join("eval_examples.json")
}
fn default_eval_results() -> PathBuf {
    PathBuf::from("data").join("results.json")
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            dataset: default_eval_dataset(),
            results: default_eval_results(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            provider: default_provider(),
            chat_model: default_chat_model(),
            embedding_model: default_embedding_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            index: IndexConfig::default(),
            eval: EvalConfig::default(),
        }
    }
}

fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("provider", &self.provider)
            .field("chat_model", &self.chat_model)
            .field("embedding_model", &self.embedding_model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("index", &self.index)
            .field("eval", &self.eval)
            .finish()
    }
}

impl AppConfig {
    /// The config directory: `~/.ragnar`
    pub fn config_dir() -> PathBuf {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".ragnar")
    }

    /// Load configuration: config file (if present), then environment
    /// overrides, then validation.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_dir().join("config.toml");
        let mut config = if path.is_file() {
            Self::from_file(&path)?
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Self::default()
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Environment variables take precedence over the config file.
    ///
    /// Recognized: `RAGNAR_API_KEY`, `OPENAI_API_KEY`, `OPENROUTER_API_KEY`
    /// (first match wins), `RAGNAR_API_URL`, `RAGNAR_CHAT_MODEL`,
    /// `RAGNAR_EMBEDDING_MODEL`.
    fn apply_env_overrides(&mut self) {
        for var in ["RAGNAR_API_KEY", "OPENAI_API_KEY", "OPENROUTER_API_KEY"] {
            if let Ok(key) = std::env::var(var) {
                if !key.trim().is_empty() {
                    self.api_key = Some(key);
                    break;
                }
            }
        }
        if let Ok(url) = std::env::var("RAGNAR_API_URL") {
            if !url.trim().is_empty() {
                self.api_url = url;
            }
        }
        if let Ok(model) = std::env::var("RAGNAR_CHAT_MODEL") {
            if !model.trim().is_empty() {
                self.chat_model = model;
            }
        }
        if let Ok(model) = std::env::var("RAGNAR_EMBEDDING_MODEL") {
            if !model.trim().is_empty() {
                self.embedding_model = model;
            }
        }
    }

    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Invalid(format!(
                "temperature must be in [0.0, 2.0], got {}",
                self.temperature
            )));
        }
        if self.index.top_k == 0 {
            return Err(ConfigError::Invalid("index.top_k must be at least 1".into()));
        }
        if self.index.chunk_size == 0 {
            return Err(ConfigError::Invalid("index.chunk_size must be positive".into()));
        }
        if self.index.chunk_overlap >= self.index.chunk_size {
            return Err(ConfigError::Invalid(format!(
                "index.chunk_overlap ({}) must be smaller than index.chunk_size ({})",
                self.index.chunk_overlap, self.index.chunk_size
            )));
        }
        Ok(())
    }
}
