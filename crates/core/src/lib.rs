//! # ragnar Core
//!
//! Domain types, port traits, and error definitions for the ragnar
//! agentic RAG pipeline. This crate has **zero framework dependencies** —
//! it defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The pipeline depends on exactly two external capabilities: generating
//! text and searching a semantic index. Both are defined as narrow traits
//! here (`LanguageModel`, `Retriever`, plus `Embedder` for ingestion).
//! Implementations live in their respective crates. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod document;
pub mod error;
pub mod input;
pub mod llm;
pub mod retriever;
pub mod trace;

// Re-export key types at crate root for ergonomics
pub use document::Document;
pub use error::{Error, InputError, LlmError, Result, RetrievalError};
pub use input::{AgentInput, ChatMessage, Role};
pub use llm::{Embedder, LanguageModel};
pub use retriever::Retriever;
pub use trace::{AgentResult, Step, Trace};
