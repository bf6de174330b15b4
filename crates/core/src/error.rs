//! Error types for the ragnar domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all ragnar operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Invocation input errors ---
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    // --- Language model errors ---
    #[error("Language model error: {0}")]
    Llm(#[from] LlmError),

    // --- Retrieval errors ---
    #[error("Retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Malformed invocation input. Raised before any port is called.
#[derive(Debug, Clone, Error)]
pub enum InputError {
    #[error("query is empty")]
    Empty,

    #[error("messages sequence is empty")]
    NoMessages,

    #[error("unsupported input shape: {0}")]
    UnsupportedShape(String),
}

/// The language model port failed or returned an unusable response.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    #[error("API request failed: {message} (status: {status_code})")]
    Api { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

/// The retriever port failed for some query.
#[derive(Debug, Clone, Error)]
pub enum RetrievalError {
    #[error("Index error: {0}")]
    Index(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Embedding generation failed: {0}")]
    Embedding(String),
}
