//! The evaluation loop — drive the agent, score, persist.

use std::path::Path;

use ragnar_agent::Agent;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::bleu::sentence_bleu;
use crate::rouge::{rouge_l, rouge_n};

/// Errors raised by the evaluation harness.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("Failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Pipeline failed: {0}")]
    Pipeline(#[from] ragnar_core::Error),
}

/// One evaluation row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalCase {
    pub question: String,
    pub ground_truth: String,
}

/// One scored prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalRecord {
    pub question: String,
    pub ground_truth: String,
    pub prediction: String,
    pub bleu: f64,
    pub rouge1: f64,
    pub rouge2: f64,
    pub rouge_l: f64,
}

/// Mean metrics over a result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalSummary {
    pub cases: usize,
    pub mean_bleu: f64,
    pub mean_rouge1: f64,
    pub mean_rouge2: f64,
    pub mean_rouge_l: f64,
}

/// Load a dataset: a JSON array of `{question, ground_truth}` objects.
pub fn load_dataset(path: &Path) -> Result<Vec<EvalCase>, EvalError> {
    let content = std::fs::read_to_string(path).map_err(|e| EvalError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Score one prediction against its ground truth.
pub fn score(case: &EvalCase, prediction: &str) -> EvalRecord {
    EvalRecord {
        question: case.question.clone(),
        ground_truth: case.ground_truth.clone(),
        prediction: prediction.to_string(),
        bleu: sentence_bleu(&case.ground_truth, prediction),
        rouge1: rouge_n(&case.ground_truth, prediction, 1).f1,
        rouge2: rouge_n(&case.ground_truth, prediction, 2).f1,
        rouge_l: rouge_l(&case.ground_truth, prediction).f1,
    }
}

/// Run every case through the agent and score the answers.
///
/// Cases run sequentially; the first pipeline failure aborts the whole
/// evaluation, matching the pipeline's own no-partial-results policy.
pub async fn run(agent: &Agent, cases: &[EvalCase]) -> Result<Vec<EvalRecord>, EvalError> {
    let mut records = Vec::with_capacity(cases.len());

    for (i, case) in cases.iter().enumerate() {
        info!(case = i + 1, total = cases.len(), question = %case.question, "Evaluating");
        let result = agent.invoke(case.question.as_str()).await?;
        records.push(score(case, &result.answer));
    }

    Ok(records)
}

/// Mean metrics over the records.
pub fn summarize(records: &[EvalRecord]) -> EvalSummary {
    let n = records.len();
    let mean = |f: fn(&EvalRecord) -> f64| {
        if n == 0 {
            0.0
        } else {
            records.iter().map(f).sum::<f64>() / n as f64
        }
    };

    EvalSummary {
        cases: n,
        mean_bleu: mean(|r| r.bleu),
        mean_rouge1: mean(|r| r.rouge1),
        mean_rouge2: mean(|r| r.rouge2),
        mean_rouge_l: mean(|r| r.rouge_l),
    }
}

/// Write records as pretty-printed JSON, creating parent directories.
pub fn save_results(path: &Path, records: &[EvalRecord]) -> Result<(), EvalError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| EvalError::Io {
            path: parent.display().to_string(),
            reason: e.to_string(),
        })?;
    }

    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).map_err(|e| EvalError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    info!(path = %path.display(), records = records.len(), "Results saved");
    Ok(())
}
