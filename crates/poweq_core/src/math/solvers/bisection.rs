//! Bisection root-finding solver.

use super::{Failure, Root, SolverConfig};
use crate::math::PowerEquation;
use crate::types::{Job, SolveError, Solution};
use num_traits::Float;

/// Bisection root finder over a sign-changing interval.
///
/// Requires `f(lower) * f(upper) <= 0`. Each iteration evaluates the
/// midpoint `c` and keeps the half whose endpoints still change sign.
/// Stops when `|f(c)| < tolerance` or the half-width drops below it.
///
/// # Example
///
/// ```
/// use poweq_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::new(1e-10, 100));
///
/// let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
/// assert!((root.x - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` in `[lower, upper]`.
    ///
    /// # Returns
    ///
    /// * `Ok(root)` - converged midpoint, with `root.iterations = n + 1`
    /// * `Err` with `SolveError::SignConditionViolated` - `f(lower) * f(upper) > 0`;
    ///   no iterations are performed
    /// * `Err` with `SolveError::MaxIterationsExceeded` - no convergence
    pub fn find_root<F>(&self, f: F, lower: T, upper: T) -> Result<Root<T>, Failure>
    where
        F: Fn(T) -> T,
    {
        let mut lo = lower;
        let mut hi = upper;
        let mut f_lo = f(lo);
        let f_hi = f(hi);

        if f_lo * f_hi > T::zero() {
            return Err(Failure {
                error: SolveError::SignConditionViolated {
                    lower: lower.to_f64().unwrap_or(f64::NAN),
                    upper: upper.to_f64().unwrap_or(f64::NAN),
                },
                iterations: 0,
            });
        }

        let two = T::one() + T::one();

        for iteration in 0..self.config.max_iterations {
            let mid = (lo + hi) / two;
            let f_mid = f(mid);

            if f_mid.abs() < self.config.tolerance || (hi - lo) / two < self.config.tolerance {
                return Ok(Root {
                    x: mid,
                    iterations: iteration + 1,
                });
            }

            if f_lo * f_mid <= T::zero() {
                hi = mid;
            } else {
                lo = mid;
                f_lo = f_mid;
            }
        }

        Err(Failure {
            error: SolveError::MaxIterationsExceeded {
                iterations: self.config.max_iterations,
            },
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

/// Runs bisection on a job's equation over `[lower, upper]`.
pub fn bisection(job: &Job, lower: f64, upper: f64) -> Solution {
    let equation = PowerEquation::from_job(job);
    let solver = BisectionSolver::new(SolverConfig::from(job));

    match solver.find_root(|x| equation.value(x), lower, upper) {
        Ok(root) => Solution::root(job.id, root.x, root.iterations),
        Err(failure) => Solution::failure(job.id, failure.iterations, failure.error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::Cell;
    use std::f64::consts::E;

    // ========================================
    // Generic Solver Tests
    // ========================================

    #[test]
    fn test_find_sqrt_2() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-12, 200));

        let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
        assert_relative_eq!(root.x, std::f64::consts::SQRT_2, epsilon = 1e-11);
    }

    #[test]
    fn test_decreasing_function() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-10, 200));

        let root = solver.find_root(|x: f64| 3.0 - x, 0.0, 10.0).unwrap();
        assert_relative_eq!(root.x, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sign_condition_violated_without_iterating() {
        let solver = BisectionSolver::<f64>::with_defaults();
        let calls = Cell::new(0);

        let failure = solver
            .find_root(
                |x: f64| {
                    calls.set(calls.get() + 1);
                    x * x + 1.0
                },
                -1.0,
                1.0,
            )
            .unwrap_err();

        assert_eq!(failure.iterations, 0);
        assert_eq!(calls.get(), 2, "only the endpoints may be evaluated");
        assert!(matches!(
            failure.error,
            SolveError::SignConditionViolated { .. }
        ));
    }

    #[test]
    fn test_root_at_endpoint_is_accepted() {
        let solver = BisectionSolver::<f64>::with_defaults();

        // f(lower) * f(upper) == 0
        let root = solver.find_root(|x: f64| x - 1.0, 1.0, 5.0).unwrap();
        assert!((root.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_max_iterations_exceeded() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-14, 5));

        let failure = solver.find_root(|x: f64| x - 0.3, 0.0, 1000.0).unwrap_err();
        assert_eq!(failure.iterations, 5);
        assert_eq!(
            failure.error,
            SolveError::MaxIterationsExceeded { iterations: 5 }
        );
    }

    #[test]
    fn test_half_width_criterion() {
        // Steep function: |f(c)| stays large, width decides
        let solver = BisectionSolver::new(SolverConfig::new(1e-3, 100));

        let root = solver.find_root(|x: f64| 1e6 * (x - 0.3), 0.0, 1.0).unwrap();
        assert!((root.x - 0.3).abs() < 1e-3);
        assert_eq!(root.iterations, 10);
        // accepted on width alone, the residual is well above the tolerance
        assert!(1e6 * (root.x - 0.3).abs() > 1e-3);
    }

    // ========================================
    // Job-Level Tests
    // ========================================

    #[test]
    fn test_bisection_on_both_branches() {
        let job = Job::new(9, 2.0, E, 0.1, 0.1, 10.0);

        let left = bisection(&job, 0.1, 2.0);
        let right = bisection(&job, 2.0, 10.0);

        assert!(left.is_root(), "left failed: {:?}", left.error);
        assert!(right.is_root(), "right failed: {:?}", right.error);
        assert!(left.x > 0.1 && left.x < 2.0);
        assert!(right.x > 2.0 && right.x < 10.0);
        assert!(left.steps <= job.max_iter);
        assert_eq!(right.id, 9);
    }

    #[test]
    fn test_bisection_without_sign_change() {
        // 2 ln x - x < 0 everywhere
        let job = Job::new(10, 2.0, E, 1.0, 0.1, 10.0);
        let result = bisection(&job, 0.1, 2.0);

        assert_eq!(result.steps, 0);
        assert_eq!(result.x, Solution::SENTINEL_X);
        assert!(matches!(
            result.error,
            Some(SolveError::SignConditionViolated { .. })
        ));
    }

    #[test]
    fn test_bisection_from_zero_lower_bound() {
        // f(0) = -inf still brackets the left root
        let job = Job::new(11, 2.0, E, 0.1, 0.0, 10.0);
        let result = bisection(&job, 0.0, 2.0);

        assert!(result.is_root(), "failed: {:?}", result.error);
        assert!(result.x > 0.3 && result.x < 0.5);
    }
}
