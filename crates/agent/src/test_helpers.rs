//! Shared test helpers for pipeline tests.

use std::sync::Mutex;

use async_trait::async_trait;
use ragnar_core::document::Document;
use ragnar_core::error::{LlmError, RetrievalError};
use ragnar_core::llm::LanguageModel;
use ragnar_core::retriever::Retriever;

/// A mock language model that returns a sequence of scripted responses.
///
/// Each call to `generate` returns the next response in the queue.
/// Panics if more calls are made than responses provided.
pub struct ScriptedLlm {
    responses: Mutex<Vec<String>>,
    call_count: Mutex<usize>,
}

impl ScriptedLlm {
    pub fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(String::from).collect()),
            call_count: Mutex::new(0),
        }
    }

    /// A model that returns the same single response once.
    pub fn single(text: &str) -> Self {
        Self::new(vec![text])
    }

    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl LanguageModel for ScriptedLlm {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        let mut count = self.call_count.lock().unwrap();
        let responses = self.responses.lock().unwrap();

        if *count >= responses.len() {
            panic!(
                "ScriptedLlm: no more responses (call #{}, have {})",
                *count,
                responses.len()
            );
        }

        let response = responses[*count].clone();
        *count += 1;
        Ok(response)
    }
}

/// A language model whose every call fails.
pub struct FailingLlm;

#[async_trait]
impl LanguageModel for FailingLlm {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Network("connection refused".into()))
    }
}

/// A retriever that returns scripted result batches in call order and
/// records the queries it was asked.
pub struct ScriptedRetriever {
    batches: Mutex<Vec<Vec<Document>>>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedRetriever {
    pub fn new(batches: Vec<Vec<Document>>) -> Self {
        Self {
            batches: Mutex::new(batches),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Retriever for ScriptedRetriever {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn search(&self, query: &str, _k: usize) -> Result<Vec<Document>, RetrievalError> {
        self.queries.lock().unwrap().push(query.to_string());
        let mut batches = self.batches.lock().unwrap();
        if batches.is_empty() {
            return Ok(Vec::new());
        }
        Ok(batches.remove(0))
    }
}

/// A retriever whose every call fails.
pub struct FailingRetriever;

#[async_trait]
impl Retriever for FailingRetriever {
    fn name(&self) -> &str {
        "failing"
    }

    async fn search(&self, _query: &str, _k: usize) -> Result<Vec<Document>, RetrievalError> {
        Err(RetrievalError::QueryFailed("index offline".into()))
    }
}

/// Build a document with just content.
pub fn doc(content: &str) -> Document {
    Document::new(content)
}
