//! Error types for loading and saving Matrix documents.
//!
//! The evaluator and classifier never fail; these errors belong to the caller
//! side that reads the document from disk before any rule runs.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The matrix file does not exist at the expected path.
    #[error("Matrix document not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The matrix file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text is not a JSON document of the expected shape.
    #[error("Matrix document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
