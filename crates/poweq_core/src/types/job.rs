//! Job description for a single equation instance.
//!
//! A [`Job`] carries the equation parameters `n`, `m`, `K`, the search
//! interval `[a, b]`, and the iteration controls. Jobs are plain values:
//! nothing in the engine mutates them, and nothing is checked at
//! construction time. Use [`crate::analysis::validate`] before solving.

/// One instance of `x^n = K * m^x` searched on `[a, b]`.
///
/// # Examples
///
/// ```
/// use poweq_core::types::Job;
///
/// let job = Job::new(7, 2.0, std::f64::consts::E, 0.1, 0.1, 10.0);
/// assert_eq!(job.id, 7);
/// assert_eq!(job.max_iter, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job {
    /// Caller-assigned identifier, used to join results back to jobs.
    pub id: i64,
    /// Exponent of `x`.
    pub n: f64,
    /// Base of the exponential term.
    pub m: f64,
    /// Coefficient of the exponential term.
    pub k: f64,
    /// Lower bound of the search interval.
    pub a: f64,
    /// Upper bound of the search interval.
    pub b: f64,
    /// Convergence tolerance.
    pub tol: f64,
    /// Iteration cap for each solver attempt.
    pub max_iter: usize,
}

impl Job {
    /// Creates a job with the default tolerance and iteration cap.
    pub fn new(id: i64, n: f64, m: f64, k: f64, a: f64, b: f64) -> Self {
        let defaults = JobDefaults::default();
        Self {
            id,
            n,
            m,
            k,
            a,
            b,
            tol: defaults.tol,
            max_iter: defaults.max_iter,
        }
    }

    /// Returns a copy with the given tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Returns a copy with the given iteration cap.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Returns a copy with a different identifier.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

/// Defaults applied by input collaborators for fields the user left unset.
///
/// Values: `n = 1`, `m = e`, `K = 1`, `a = 1e-6`, `b = 1e6`, `tol = 1e-6`,
/// `max_iter = 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobDefaults {
    /// Default exponent.
    pub n: f64,
    /// Default base.
    pub m: f64,
    /// Default coefficient.
    pub k: f64,
    /// Default lower bound.
    pub a: f64,
    /// Default upper bound.
    pub b: f64,
    /// Default tolerance.
    pub tol: f64,
    /// Default iteration cap.
    pub max_iter: usize,
}

impl Default for JobDefaults {
    fn default() -> Self {
        Self {
            n: 1.0,
            m: std::f64::consts::E,
            k: 1.0,
            a: 1e-6,
            b: 1e6,
            tol: 1e-6,
            max_iter: 100,
        }
    }
}

impl JobDefaults {
    /// Builds a job from these defaults.
    pub fn job(&self, id: i64) -> Job {
        Job {
            id,
            n: self.n,
            m: self.m,
            k: self.k,
            a: self.a,
            b: self.b,
            tol: self.tol,
            max_iter: self.max_iter,
        }
    }
}
