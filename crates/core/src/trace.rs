//! The step trace — an ordered, append-only audit of one pipeline run.
//!
//! Every invocation records what happened: one planning step, one
//! retrieval step per sub-question, one answer step. Consumers (tests,
//! the evaluation harness) pattern-match the variants exhaustively.

use serde::{Deserialize, Serialize};

/// One recorded pipeline step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// The planner produced this ordered list of sub-questions.
    Planning { sub_questions: Vec<String> },

    /// One retrieval call was issued for `sub_question`, returning
    /// `doc_count` documents (possibly zero).
    Retrieval {
        sub_question: String,
        doc_count: usize,
    },

    /// The synthesizer produced the final answer.
    Answer { answer: String },
}

/// An append-only sequence of [`Step`]s in execution order.
///
/// There is deliberately no removal or in-place mutation API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace(Vec<Step>);

impl Trace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a step.
    pub fn push(&mut self, step: Step) {
        self.0.push(step);
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no steps have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the steps in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.0.iter()
    }

    /// The steps as a slice, in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The terminal output of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResult {
    /// The synthesized answer.
    pub answer: String,

    /// The full step trace, in execution order.
    pub steps: Trace,
}
