//! Invocation input — the heterogeneous shapes callers hand to the agent.
//!
//! Callers pass either a bare question string or a chat-style payload of
//! `{ "messages": [{role, content}, ...] }`. Both are resolved once, at the
//! orchestrator boundary, into a single canonical query string; nothing
//! downstream ever sees the raw shape.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// The role of a message sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user
    User,
    /// The AI assistant
    Assistant,
    /// System instructions
    System,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who sent this message
    pub role: Role,

    /// The text content
    pub content: String,
}

impl ChatMessage {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The two accepted invocation shapes.
///
/// Deserializes untagged, so a JSON string becomes `Text` and an object
/// with a `messages` array becomes `Messages`. Anything else is rejected
/// at the boundary with an [`InputError`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgentInput {
    /// A bare question string, used as-is.
    Text(String),

    /// A running conversation; the query is the LAST message's content.
    Messages { messages: Vec<ChatMessage> },
}

impl AgentInput {
    /// Resolve this input into the canonical query string.
    ///
    /// A bare string is used as-is. For a message sequence the query is
    /// taken from the last message — callers appending a running
    /// conversation get the most recent turn, not the first.
    pub fn query(&self) -> std::result::Result<&str, InputError> {
        let raw = match self {
            Self::Text(text) => text.as_str(),
            Self::Messages { messages } => messages
                .last()
                .map(|m| m.content.as_str())
                .ok_or(InputError::NoMessages)?,
        };

        let query = raw.trim();
        if query.is_empty() {
            return Err(InputError::Empty);
        }
        Ok(query)
    }
}

impl From<&str> for AgentInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AgentInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<ChatMessage>> for AgentInput {
    fn from(messages: Vec<ChatMessage>) -> Self {
        Self::Messages { messages }
    }
}

impl TryFrom<serde_json::Value> for AgentInput {
    type Error = InputError;

    /// Accept a raw JSON value from a dynamic caller.
    ///
    /// Numbers, arrays, and objects without a `messages` array all fail
    /// here, before any port is invoked.
    fn try_from(value: serde_json::Value) -> std::result::Result<Self, InputError> {
        let shape = match &value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        };
        serde_json::from_value(value).map_err(|_| InputError::UnsupportedShape(shape.to_string()))
    }
}
