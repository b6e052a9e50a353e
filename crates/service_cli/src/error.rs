//! CLI error types.

use poweq_batch::BatchError;
use poweq_core::types::SolveError;
use thiserror::Error;

/// Errors that end a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The job was rejected before solving.
    #[error(transparent)]
    Solve(#[from] SolveError),

    /// A job or result file could not be read or written.
    #[error(transparent)]
    Batch(#[from] BatchError),

    /// The input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// An argument combination clap cannot check.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
