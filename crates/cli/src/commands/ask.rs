//! `ragnar ask` — run one question through the pipeline.

use ragnar_config::AppConfig;
use ragnar_core::trace::Step;

use super::{build_agent, build_client, ensure_api_key};

/// The query used when none is given.
const EXAMPLE_QUERY: &str = "What is agentic RAG?";

pub async fn run(question: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    ensure_api_key(&config)?;

    let client = build_client(&config);
    let agent = build_agent(&config, client)?;

    let question = question.unwrap_or_else(|| EXAMPLE_QUERY.to_string());
    println!("Query: {question}");

    let result = agent.invoke(question.as_str()).await?;

    println!();
    for step in &result.steps {
        match step {
            Step::Planning { sub_questions } => {
                println!("  Plan ({} sub-questions):", sub_questions.len());
                for sq in sub_questions {
                    println!("    - {sq}");
                }
            }
            Step::Retrieval {
                sub_question,
                doc_count,
            } => {
                println!("  Retrieved {doc_count} document(s) for: {sub_question}");
            }
            Step::Answer { .. } => {}
        }
    }

    println!();
    println!("Answer: {}", result.answer);

    Ok(())
}
