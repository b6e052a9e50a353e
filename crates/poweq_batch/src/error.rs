//! Error types for batch input and output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing batch files.
///
/// Malformed rows are not errors: they are skipped with a warning. These
/// variants cover failures that make the whole file unusable.
#[derive(Error, Debug)]
pub enum BatchError {
    /// A file could not be opened or created.
    #[error("cannot open {path}: {source}")]
    Open {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The CSV header or a write failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input header does not name the expected columns.
    #[error("missing column '{0}' in CSV header")]
    MissingColumn(&'static str),
}

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;
