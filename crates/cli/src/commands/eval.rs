//! `ragnar eval` — score the pipeline against a dataset.

use std::path::PathBuf;

use ragnar_config::AppConfig;
use ragnar_eval::{load_dataset, run as run_eval, save_results, summarize};

use super::{build_agent, build_client, ensure_api_key};

pub async fn run(
    dataset: Option<PathBuf>,
    out: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    ensure_api_key(&config)?;

    let dataset_path = dataset.unwrap_or_else(|| config.eval.dataset.clone());
    let results_path = out.unwrap_or_else(|| config.eval.results.clone());

    let client = build_client(&config);
    let agent = build_agent(&config, client)?;

    let cases = load_dataset(&dataset_path)?;
    println!("Evaluating {} cases from {}...", cases.len(), dataset_path.display());

    let records = run_eval(&agent, &cases).await?;
    save_results(&results_path, &records)?;

    println!();
    println!(
        "  {:<40} {:>7} {:>7} {:>7} {:>7}",
        "question", "BLEU", "ROUGE1", "ROUGE2", "ROUGEL"
    );
    for record in &records {
        let question: String = if record.question.chars().count() > 40 {
            let head: String = record.question.chars().take(37).collect();
            format!("{head}...")
        } else {
            record.question.clone()
        };
        println!(
            "  {:<40} {:>7.3} {:>7.3} {:>7.3} {:>7.3}",
            question, record.bleu, record.rouge1, record.rouge2, record.rouge_l
        );
    }

    let summary = summarize(&records);
    println!();
    println!(
        "  {:<40} {:>7.3} {:>7.3} {:>7.3} {:>7.3}",
        format!("mean ({} cases)", summary.cases),
        summary.mean_bleu,
        summary.mean_rouge1,
        summary.mean_rouge2,
        summary.mean_rouge_l
    );
    println!();
    println!("Results saved to {}.", results_path.display());

    Ok(())
}
