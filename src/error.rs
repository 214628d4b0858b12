//! Errors at the input boundary
//!
//! Extraction never fails. The only failures this crate reports are those
//! that happen before a `MergeResult` exists: reading, decoding, or receiving
//! something that is not an object.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a merge result
#[derive(Debug, Error)]
pub enum PactumError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Merge result must be an object, got {0}")]
    NotAnObject(&'static str),

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for input-boundary operations
pub type PactumResult<T> = Result<T, PactumError>;
