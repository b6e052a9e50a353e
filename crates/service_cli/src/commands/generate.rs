//! Generate command implementation
//!
//! Writes random jobs that are known to have real roots.

use std::path::Path;

use poweq_batch::{generate, write_jobs_to_path};
use tracing::info;

use crate::{CliError, Result};

/// Run the generate command
pub fn run(count: usize, output: &Path, seed: Option<u64>) -> Result<usize> {
    if count == 0 {
        return Err(CliError::InvalidArgument(
            "number of jobs must be positive".to_string(),
        ));
    }

    let jobs = generate(count, seed);
    write_jobs_to_path(output, &jobs)?;

    info!(count = jobs.len(), ?seed, output = %output.display(), "Jobs generated");
    println!("Generated {} jobs into {}", jobs.len(), output.display());
    Ok(jobs.len())
}
