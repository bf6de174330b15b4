//! Offline evaluation harness for ragnar.
//!
//! Drives the agent over a table of `{question, ground_truth}` rows and
//! scores each answer with textual similarity metrics (BLEU and
//! ROUGE-1/2/L). Results are written as JSON; rendering charts from them
//! is out of scope.

pub mod bleu;
pub mod harness;
pub mod rouge;

pub use bleu::sentence_bleu;
pub use harness::{
    load_dataset, run, save_results, summarize, EvalCase, EvalError, EvalRecord, EvalSummary,
};
pub use rouge::{rouge_l, rouge_n, RougeScore};
