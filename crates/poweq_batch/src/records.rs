//! CSV job and result files.
//!
//! Job files have the header `Id,N,M,K,A,B,Tol,MaxIter`. Result files repeat
//! the job columns and add `X,Steps,Error`, one row per attempt.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use poweq_core::types::Job;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::batch::Batch;
use crate::error::{BatchError, BatchResult};

/// Columns of a job file, in order.
pub const JOB_COLUMNS: [&str; 8] = ["Id", "N", "M", "K", "A", "B", "Tol", "MaxIter"];

/// Columns of a result file, in order.
pub const RESULT_COLUMNS: [&str; 11] = [
    "Id", "N", "M", "K", "A", "B", "Tol", "MaxIter", "X", "Steps", "Error",
];

/// One row of a job file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "M")]
    pub m: f64,
    #[serde(rename = "K")]
    pub k: f64,
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "B")]
    pub b: f64,
    #[serde(rename = "Tol")]
    pub tol: f64,
    /// Signed so that a negative cap reaches validation instead of failing to parse
    #[serde(rename = "MaxIter")]
    pub max_iter: i64,
}

impl From<JobRecord> for Job {
    fn from(r: JobRecord) -> Self {
        Job::new(r.id, r.n, r.m, r.k, r.a, r.b)
            .with_tolerance(r.tol)
            // a negative cap becomes 0 and is rejected by validation
            .with_max_iter(usize::try_from(r.max_iter).unwrap_or(0))
    }
}

impl From<&Job> for JobRecord {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            n: job.n,
            m: job.m,
            k: job.k,
            a: job.a,
            b: job.b,
            tol: job.tol,
            max_iter: i64::try_from(job.max_iter).unwrap_or(i64::MAX),
        }
    }
}

/// Reads jobs from CSV, skipping rows that do not parse.
///
/// # Errors
///
/// [`BatchError::MissingColumn`] if the header lacks a job column, or
/// [`BatchError::Csv`] if the header cannot be read.
pub fn read_jobs<R: Read>(input: R) -> BatchResult<Vec<Job>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    if let Some(missing) = JOB_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        return Err(BatchError::MissingColumn(missing));
    }

    let mut jobs = Vec::new();
    let mut skipped = 0usize;
    for (index, record) in reader.deserialize::<JobRecord>().enumerate() {
        match record {
            Ok(record) => jobs.push(Job::from(record)),
            Err(err) => {
                skipped += 1;
                // header is line 1
                warn!(line = index + 2, error = %err, "skipping malformed job row");
            }
        }
    }
    debug!(jobs = jobs.len(), skipped, "read job file");
    Ok(jobs)
}

/// Reads a job file from disk.
pub fn read_jobs_from_path(path: impl AsRef<Path>) -> BatchResult<Vec<Job>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BatchError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_jobs(file)
}

/// Writes jobs as CSV with full float precision.
pub fn write_jobs<W: Write>(output: W, jobs: &[Job]) -> BatchResult<()> {
    let mut writer = csv::Writer::from_writer(output);
    if jobs.is_empty() {
        writer.write_record(JOB_COLUMNS)?;
    }
    for job in jobs {
        writer.serialize(JobRecord::from(job))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a job file to disk.
pub fn write_jobs_to_path(path: impl AsRef<Path>, jobs: &[Job]) -> BatchResult<()> {
    write_jobs(create(path.as_ref())?, jobs)
}

/// Writes one row per attempt.
///
/// Job parameters use two decimals, the tolerance two-digit scientific
/// notation and `X` six decimals. `Error` is empty for roots.
pub fn write_results<W: Write>(output: W, batch: &Batch) -> BatchResult<()> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(RESULT_COLUMNS)?;

    for (job, solution) in batch.rows() {
        let error = solution
            .error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        writer.write_record([
            job.id.to_string(),
            format!("{:.2}", job.n),
            format!("{:.2}", job.m),
            format!("{:.2}", job.k),
            format!("{:.2}", job.a),
            format!("{:.2}", job.b),
            format!("{:.2e}", job.tol),
            job.max_iter.to_string(),
            format!("{:.6}", solution.x),
            solution.steps.to_string(),
            error,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a result file to disk.
pub fn write_results_to_path(path: impl AsRef<Path>, batch: &Batch) -> BatchResult<()> {
    write_results(create(path.as_ref())?, batch)
}

fn create(path: &Path) -> BatchResult<File> {
    File::create(path).map_err(|source| BatchError::Open {
        path: path.to_path_buf(),
        source,
    })
}
