//! The full solve pipeline: validate, edge cases, existence, dispatch.

use super::dispatcher::{dispatch, AttemptPolicy};
use super::Strategy;
use crate::analysis::{handle_edge_cases, peak, validate, EdgeCase};
use crate::types::{Job, SolveError, Solution};

/// Something the pipeline decided that callers may want to log.
///
/// The core never logs; collaborators turn these into tracing events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diagnostic {
    /// The job was degenerate and solved in closed form.
    EdgeCase(EdgeCase),
    /// The concavity check ruled out any real root.
    NoRealRoots {
        /// Maximum of `f`, which is negative
        peak: f64,
    },
    /// `Auto` ran bisection because no Newton attempt found a root.
    FellBackToBisection,
    /// Failed attempts removed by the attempt policy.
    AttemptsDropped {
        /// Number of attempts removed
        count: usize,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::EdgeCase(case) => write!(f, "edge case {}", case),
            Diagnostic::NoRealRoots { peak } => {
                write!(f, "no real roots (maximum of f is {})", peak)
            }
            Diagnostic::FellBackToBisection => write!(f, "newton found no root, used bisection"),
            Diagnostic::AttemptsDropped { count } => write!(f, "{} failed attempts dropped", count),
        }
    }
}

/// Everything one job produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    /// Id of the solved job
    pub job_id: i64,
    /// Strategy the job was solved with
    pub strategy: Strategy,
    /// One entry per attempt, in candidate order
    pub solutions: Vec<Solution>,
    /// Pipeline decisions, in the order they were made
    pub diagnostics: Vec<Diagnostic>,
}

impl SolveReport {
    /// Successful attempts only.
    pub fn roots(&self) -> impl Iterator<Item = &Solution> {
        self.solutions.iter().filter(|s| s.is_root())
    }

    /// Root values in candidate order.
    pub fn root_values(&self) -> Vec<f64> {
        self.roots().map(|s| s.x).collect()
    }

    /// `true` if at least one attempt converged.
    pub fn has_root(&self) -> bool {
        self.roots().next().is_some()
    }

    /// `true` if there is nothing to report at all.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

/// Solves jobs end to end.
///
/// Runs, in order: [`validate`], [`handle_edge_cases`], the existence check,
/// then the solvers chosen by the [`Strategy`].
///
/// # Examples
///
/// ```
/// use poweq_core::dispatch::{Engine, Strategy};
/// use poweq_core::types::Job;
///
/// let engine = Engine::default();
/// let job = Job::new(1, 2.0, std::f64::consts::E, 0.1, 0.1, 10.0);
/// let report = engine.run(&job, Strategy::Auto).unwrap();
/// assert_eq!(report.root_values().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    policy: AttemptPolicy,
}

impl Engine {
    /// Creates an engine with the given attempt policy.
    pub fn new(policy: AttemptPolicy) -> Self {
        Self { policy }
    }

    /// Returns the attempt policy.
    #[inline]
    pub fn policy(&self) -> AttemptPolicy {
        self.policy
    }

    /// Solves one job.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Validation`] if the job is malformed. Every
    /// other failure is reported per attempt inside the report.
    pub fn run(&self, job: &Job, strategy: Strategy) -> Result<SolveReport, SolveError> {
        validate(job)?;

        let mut report = SolveReport {
            job_id: job.id,
            strategy,
            solutions: Vec::new(),
            diagnostics: Vec::new(),
        };

        if let Some(edge) = handle_edge_cases(job) {
            report.diagnostics.push(Diagnostic::EdgeCase(edge.case));
            report.solutions.push(edge.solution);
            return Ok(report);
        }

        if let Some(peak) = peak(job).filter(|p| *p < 0.0) {
            report.diagnostics.push(Diagnostic::NoRealRoots { peak });
            report
                .solutions
                .push(Solution::failure(job.id, 0, SolveError::NoRealRoots { peak }));
            return Ok(report);
        }

        let outcome = dispatch(job, strategy, self.policy);
        if outcome.fell_back {
            report.diagnostics.push(Diagnostic::FellBackToBisection);
        }
        if outcome.dropped > 0 {
            report.diagnostics.push(Diagnostic::AttemptsDropped {
                count: outcome.dropped,
            });
        }
        report.solutions = outcome.solutions;
        Ok(report)
    }

    /// Solves one job with a strategy given by name.
    ///
    /// # Errors
    ///
    /// [`SolveError::UnknownAlgorithm`] for an unrecognised name, otherwise
    /// as [`Engine::run`].
    pub fn run_named(&self, job: &Job, algorithm: &str) -> Result<SolveReport, SolveError> {
        let strategy: Strategy = algorithm.parse()?;
        self.run(job, strategy)
    }
}
