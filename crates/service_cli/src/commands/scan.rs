//! Scan command implementation
//!
//! Solves every job in a CSV file and writes one result row per attempt.

use std::path::Path;

use poweq_batch::{read_jobs_from_path, write_results_to_path, BatchRunner, BatchSummary};
use poweq_core::dispatch::{AttemptPolicy, Strategy};
use tracing::info;

use crate::{CliError, Result};

/// Run the scan command
pub fn run(
    input: &Path,
    output: &Path,
    strategy: Strategy,
    policy: AttemptPolicy,
) -> Result<BatchSummary> {
    if !input.exists() {
        return Err(CliError::FileNotFound(input.display().to_string()));
    }
    if input == output {
        return Err(CliError::InvalidArgument(
            "input and output must be different files".to_string(),
        ));
    }

    info!(input = %input.display(), output = %output.display(), "Scanning jobs");

    let jobs = read_jobs_from_path(input)?;
    let batch = BatchRunner::with_policy(policy).run(&jobs, strategy);
    write_results_to_path(output, &batch)?;

    let summary = batch.summary();
    info!(%summary, "Scan complete");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_writes_results() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("jobs.csv");
        let output = dir.path().join("solutions.csv");
        fs::write(
            &input,
            "Id,N,M,K,A,B,Tol,MaxIter\n1,2,2,1,0.5,10,1e-6,100\n2,2,2,1,5,2,1e-6,100\nbad row\n",
        )
        .unwrap();

        let summary = run(&input, &output, Strategy::Auto, AttemptPolicy::ReportAll).unwrap();
        assert_eq!(summary.jobs, 2);
        assert_eq!(summary.roots, 2);
        assert_eq!(summary.failures, 1);

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written.lines().count(), 4);
        assert!(written.lines().nth(3).unwrap().starts_with("2,"));
    }

    #[test]
    fn test_missing_input() {
        let dir = tempdir().unwrap();
        let err = run(
            &dir.path().join("absent.csv"),
            &dir.path().join("out.csv"),
            Strategy::Auto,
            AttemptPolicy::ReportAll,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
