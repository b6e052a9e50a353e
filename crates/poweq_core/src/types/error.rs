//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValidationError`: a malformed [`Job`](super::Job), reported before solving
//! - `SolveError`: every condition a solve attempt can end in
//!
//! Validation errors abort the whole job. Every other variant belongs to a
//! single attempt (one Newton seed or one bisection interval) and is carried
//! on the [`Solution`](super::Solution) for that attempt.

use thiserror::Error;

/// The first violated constraint of a job.
///
/// # Examples
/// ```
/// use poweq_core::types::ValidationError;
///
/// let err = ValidationError::InvertedInterval { a: 5.0, b: 2.0 };
/// assert_eq!(format!("{}", err), "lower bound a = 5 must be less than upper bound b = 2");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `n` is negative (or NaN).
    #[error("exponent n = {0} must be zero or positive")]
    NegativeExponent(f64),

    /// `m` is below one (or NaN).
    #[error("base m = {0} must be at least 1")]
    BaseBelowOne(f64),

    /// `K` is zero, negative, or NaN.
    #[error("coefficient K = {0} must be positive")]
    NonPositiveCoefficient(f64),

    /// `a` is negative (or NaN).
    #[error("lower bound a = {0} must be zero or positive")]
    NegativeLowerBound(f64),

    /// `b` is zero, negative, or NaN.
    #[error("upper bound b = {0} must be positive")]
    NonPositiveUpperBound(f64),

    /// `a >= b`.
    #[error("lower bound a = {a} must be less than upper bound b = {b}")]
    InvertedInterval {
        /// Lower bound
        a: f64,
        /// Upper bound
        b: f64,
    },

    /// `tol` is zero, negative, or NaN.
    #[error("tolerance {0} must be positive")]
    NonPositiveTolerance(f64),

    /// `max_iter == 0`.
    #[error("max_iter must be positive")]
    ZeroMaxIterations,
}

/// Errors produced while solving a job.
///
/// # Examples
/// ```
/// use poweq_core::types::SolveError;
///
/// let err = SolveError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The job failed validation; nothing was attempted.
    #[error("invalid job: {0}")]
    Validation(#[from] ValidationError),

    /// A closed-form edge case produced a root outside `[a, b]`.
    #[error("closed-form solution x = {x} lies outside [{a}, {b}]")]
    NoSolutionInRange {
        /// The closed-form value
        x: f64,
        /// Lower bound
        a: f64,
        /// Upper bound
        b: f64,
    },

    /// The maximum of `f` is negative, so no real root exists at all.
    #[error("no real roots: maximum of f is {peak} < 0")]
    NoRealRoots {
        /// Value of `f` at its critical point
        peak: f64,
    },

    /// Newton hit a point where `f'(x) = 0`.
    #[error("derivative is zero at x = {x}")]
    ZeroDerivative {
        /// Point where the derivative vanished
        x: f64,
    },

    /// Newton converged, but outside `[a, b]`.
    #[error("solution x = {x} out of bounds [{a}, {b}]")]
    OutOfBounds {
        /// Converged value
        x: f64,
        /// Lower bound
        a: f64,
        /// Upper bound
        b: f64,
    },

    /// `f(lower)` and `f(upper)` have the same sign.
    #[error("f({lower}) and f({upper}) must have opposite signs")]
    SignConditionViolated {
        /// Lower end of the interval
        lower: f64,
        /// Upper end of the interval
        upper: f64,
    },

    /// No convergence within the iteration cap.
    #[error("failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// A strategy name that is not `newton`, `bisection`, or `auto`.
    #[error("unknown algorithm: {0} (expected newton, bisection or auto)")]
    UnknownAlgorithm(String),

    /// Every attempt was filtered out and nothing is left to report.
    #[error("no solutions found")]
    NoSolutionsFound,
}

impl SolveError {
    /// Short machine-readable kind, stable across message changes.
    pub fn kind(&self) -> &'static str {
        match self {
            SolveError::Validation(_) => "validation_error",
            SolveError::NoSolutionInRange { .. } => "no_solution_in_range",
            SolveError::NoRealRoots { .. } => "no_real_roots",
            SolveError::ZeroDerivative { .. } => "zero_derivative",
            SolveError::OutOfBounds { .. } => "out_of_bounds",
            SolveError::SignConditionViolated { .. } => "sign_condition_violated",
            SolveError::MaxIterationsExceeded { .. } => "max_iterations_exceeded",
            SolveError::UnknownAlgorithm(_) => "unknown_algorithm",
            SolveError::NoSolutionsFound => "no_solutions_found",
        }
    }
}
