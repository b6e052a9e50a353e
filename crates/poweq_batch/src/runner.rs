//! Parallel batch solving.

use poweq_core::dispatch::{AttemptPolicy, Diagnostic, Engine, Strategy};
use poweq_core::types::{Job, SolveError, Solution};
use tracing::{debug, info, warn};

use crate::batch::{Batch, BatchEntry};
use crate::parallel::{process_in_batches, ParallelConfig};

/// Solves many jobs with one engine.
///
/// Each job is independent. Large batches are spread over the rayon pool;
/// entries always come back in input order.
///
/// # Examples
///
/// ```
/// use poweq_batch::BatchRunner;
/// use poweq_core::dispatch::Strategy;
/// use poweq_core::types::Job;
///
/// let jobs = vec![
///     Job::new(1, 2.0, 2.0, 1.0, 0.5, 10.0),
///     Job::new(2, 2.0, 2.0, 1.0, 5.0, 2.0), // inverted interval
/// ];
/// let batch = BatchRunner::default().run(&jobs, Strategy::Auto);
/// assert_eq!(batch.entries[0].roots().count(), 2);
/// assert!(batch.entries[1].solutions[0].error.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    engine: Engine,
    parallel: ParallelConfig,
}

impl BatchRunner {
    /// Creates a runner.
    pub fn new(engine: Engine, parallel: ParallelConfig) -> Self {
        Self { engine, parallel }
    }

    /// Default parallelism with the given attempt policy.
    pub fn with_policy(policy: AttemptPolicy) -> Self {
        Self::new(Engine::new(policy), ParallelConfig::default())
    }

    /// Returns the parallel configuration.
    pub fn parallel_config(&self) -> &ParallelConfig {
        &self.parallel
    }

    /// Solves every job.
    pub fn run(&self, jobs: &[Job], strategy: Strategy) -> Batch {
        let parallel = self.parallel.should_parallelize(jobs.len());
        info!(jobs = jobs.len(), %strategy, parallel, "solving batch");

        let entries = if parallel {
            process_in_batches(jobs, self.parallel.batch_size, |job| {
                self.solve_job(job, strategy)
            })
        } else {
            jobs.iter().map(|job| self.solve_job(job, strategy)).collect()
        };

        let batch = Batch { strategy, entries };
        info!(summary = %batch.summary(), "batch solved");
        batch
    }

    /// Solves one job, turning every outcome into result rows.
    ///
    /// An invalid job becomes a single row carrying the validation error.
    /// A job whose attempts were all dropped becomes a single
    /// [`SolveError::NoSolutionsFound`] row.
    pub fn solve_job(&self, job: &Job, strategy: Strategy) -> BatchEntry {
        let report = match self.engine.run(job, strategy) {
            Ok(report) => report,
            Err(err) => {
                warn!(job_id = job.id, error = %err, "invalid job parameters");
                return BatchEntry {
                    job: *job,
                    solutions: vec![Solution::failure(job.id, 0, err)],
                    diagnostics: Vec::new(),
                };
            }
        };

        for diagnostic in &report.diagnostics {
            match diagnostic {
                Diagnostic::NoRealRoots { .. } => warn!(
                    job_id = job.id,
                    %diagnostic,
                    "no solutions exist for the given parameters"
                ),
                _ => debug!(job_id = job.id, %diagnostic, "pipeline decision"),
            }
        }

        let solutions = if report.is_empty() {
            warn!(job_id = job.id, "no solutions found");
            vec![Solution::failure(job.id, 0, SolveError::NoSolutionsFound)]
        } else {
            report.solutions
        };

        BatchEntry {
            job: *job,
            solutions,
            diagnostics: report.diagnostics,
        }
    }
}
