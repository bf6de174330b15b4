//! `ragnar ingest` — build and persist the semantic index.

use std::path::PathBuf;

use ragnar_config::AppConfig;
use ragnar_index::{build_index, Chunker};

use super::{build_client, ensure_api_key};

pub async fn run(
    data_dir: Option<PathBuf>,
    index: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    ensure_api_key(&config)?;

    let data_dir = data_dir.unwrap_or_else(|| config.index.data_dir.clone());
    let index_path = index.unwrap_or_else(|| config.index.path.clone());

    println!("Ingesting documents from {}...", data_dir.display());

    let client = build_client(&config);
    let chunker = Chunker::new(config.index.chunk_size, config.index.chunk_overlap);
    let store = build_index(&data_dir, &chunker, client.as_ref()).await?;

    if store.is_empty() {
        eprintln!("No documents found under {}.", data_dir.display());
        return Err("Nothing to index.".into());
    }

    store.save(&index_path)?;
    println!("Indexed {} chunks into {}.", store.len(), index_path.display());

    Ok(())
}
