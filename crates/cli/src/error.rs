//! CLI error types.

use std::path::PathBuf;

use eventdash_core::calendar::RecordError;
use eventdash_core::query::InputError;
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while loading data or running a query.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("input not accepted: {0}")]
    InputNotAccepted(#[from] InputError),

    #[error("Failed to read dataset {path}: {source}")]
    ReadDataset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset: {0}")]
    ParseDataset(#[from] serde_json::Error),

    #[error("Invalid {kind} at index {index}: {source}")]
    InvalidRecord {
        kind: &'static str,
        index: usize,
        #[source]
        source: RecordError,
    },
}
