//! Solved batches.

use std::fmt;

use poweq_core::dispatch::{Diagnostic, Strategy};
use poweq_core::types::{Job, Solution};

/// One job and everything solving it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    /// The job as read
    pub job: Job,
    /// Never empty: failures, including invalid jobs, are rows too
    pub solutions: Vec<Solution>,
    /// Pipeline decisions for this job
    pub diagnostics: Vec<Diagnostic>,
}

impl BatchEntry {
    /// Roots found for this job.
    pub fn roots(&self) -> impl Iterator<Item = &Solution> {
        self.solutions.iter().filter(|s| s.is_root())
    }
}

/// Entries in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Strategy every job was solved with
    pub strategy: Strategy,
    /// One entry per input job
    pub entries: Vec<BatchEntry>,
}

impl Batch {
    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the batch has no jobs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every result row with the job it belongs to, in output order.
    pub fn rows(&self) -> impl Iterator<Item = (&Job, &Solution)> {
        self.entries
            .iter()
            .flat_map(|entry| entry.solutions.iter().map(move |s| (&entry.job, s)))
    }

    /// Counts for logging.
    pub fn summary(&self) -> BatchSummary {
        let (roots, failures) = self.rows().fold((0, 0), |(r, f), (_, s)| {
            if s.is_root() {
                (r + 1, f)
            } else {
                (r, f + 1)
            }
        });
        BatchSummary {
            jobs: self.len(),
            roots,
            failures,
        }
    }
}

/// Aggregate counts over a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Jobs solved
    pub jobs: usize,
    /// Rows with a root
    pub roots: usize,
    /// Rows with an error
    pub failures: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} jobs, {} roots, {} failed attempts",
            self.jobs, self.roots, self.failures
        )
    }
}
