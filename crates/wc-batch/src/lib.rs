//! wc-batch: batch files of validation checks.
//!
//! A batch file lists named checks in YAML or JSON. Loading parses and
//! structurally validates the file; running executes every check and keeps
//! file order in the output.

pub mod run;
pub mod schema;
pub mod validate;

pub use run::{BatchSummary, CheckOutcome, RunOptions, run_batch, summarize};
pub use schema::{BatchFile, CheckDef, CheckKind};
pub use validate::{LATEST_VERSION, StructureError, validate_batch};

use std::path::{Path, PathBuf};

pub type BatchResult<T> = Result<T, BatchError>;

#[derive(thiserror::Error, Debug)]
pub enum BatchError {
    #[error("Batch structure error: {0}")]
    Structure(#[from] StructureError),

    #[error("Failed to read batch file: {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported batch file extension: {path} (expected .yaml, .yml or .json)")]
    UnknownFormat { path: PathBuf },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml_str(content: &str) -> BatchResult<BatchFile> {
    let batch: BatchFile = serde_yaml::from_str(content)?;
    validate_batch(&batch)?;
    Ok(batch)
}

pub fn load_json_str(content: &str) -> BatchResult<BatchFile> {
    let batch: BatchFile = serde_json::from_str(content)?;
    validate_batch(&batch)?;
    Ok(batch)
}

/// Load a batch file, choosing the parser from the extension.
pub fn load_path(path: &Path) -> BatchResult<BatchFile> {
    let content = std::fs::read_to_string(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let batch = match ext.as_deref() {
        Some("yaml") | Some("yml") => load_yaml_str(&content)?,
        Some("json") => load_json_str(&content)?,
        _ => {
            return Err(BatchError::UnknownFormat {
                path: path.to_path_buf(),
            });
        }
    };

    tracing::info!(
        path = %path.display(),
        checks = batch.checks.len(),
        "batch file loaded"
    );
    Ok(batch)
}
