//! Source document loading.
//!
//! Walks a data directory recursively and reads every `.txt` file.
//! Unreadable files are skipped with a warning; a missing directory is an
//! error, since an index built from nothing is almost certainly a
//! misconfiguration.

use std::path::{Path, PathBuf};

use ragnar_core::error::RetrievalError;
use tracing::{debug, warn};

/// One loaded source file, pre-chunking.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Full path on disk.
    pub path: PathBuf,

    /// File name used as the `source` metadata of its chunks.
    pub name: String,

    /// The file contents.
    pub content: String,
}

/// Load all `.txt` documents under `dir`, sorted by path for
/// deterministic index builds.
pub fn load_documents(dir: &Path) -> Result<Vec<SourceDocument>, RetrievalError> {
    if !dir.is_dir() {
        return Err(RetrievalError::Index(format!(
            "data directory not found: {}",
            dir.display()
        )));
    }

    let mut paths = Vec::new();
    collect_txt_files(dir, &mut paths)?;
    paths.sort();

    let mut documents = Vec::new();
    for path in paths {
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                documents.push(SourceDocument {
                    path,
                    name,
                    content,
                });
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable document");
            }
        }
    }

    debug!(count = documents.len(), dir = %dir.display(), "Documents loaded");
    Ok(documents)
}

fn collect_txt_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RetrievalError> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        RetrievalError::Index(format!("failed to read {}: {e}", dir.display()))
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            RetrievalError::Index(format!("failed to read {}: {e}", dir.display()))
        })?;
        let path = entry.path();
        if path.is_dir() {
            collect_txt_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "txt") {
            out.push(path);
        }
    }
    Ok(())
}
