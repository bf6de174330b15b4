//! Document — a retrieved evidence unit.
//!
//! Documents are owned by the retriever side; the pipeline holds them only
//! for the duration of one run. `metadata` is opaque and origin-defined
//! (source file, chunk index, whatever the index recorded).

use serde::{Deserialize, Serialize};

/// One unit of retrieved evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The passage text.
    pub content: String,

    /// Origin-defined key-value metadata.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, serde_json::Value>,

    /// Relevance score (set by search operations).
    #[serde(default)]
    pub score: f32,
}

impl Document {
    /// Create a document with empty metadata and a zero score.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: serde_json::Map::new(),
            score: 0.0,
        }
    }

    /// Attach a metadata entry (builder style).
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Set the relevance score (builder style).
    pub fn with_score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }
}
