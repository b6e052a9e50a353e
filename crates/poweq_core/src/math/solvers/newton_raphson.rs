//! Newton-Raphson root-finding solver.

use super::{Failure, Root, SolverConfig};
use crate::math::PowerEquation;
use crate::types::{Job, SolveError, Solution};
use num_traits::Float;

/// Newton-Raphson root finder.
///
/// Uses `x_{n+1} = x_n - f(x_n) / f'(x_n)` and stops once two successive
/// iterates differ by less than the tolerance.
///
/// # Example
///
/// ```
/// use poweq_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 50));
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let root = solver.find_root(f, f_prime, 1.0).unwrap();
/// assert!((root.x - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// # Returns
    ///
    /// * `Ok(root)` - `|x_{n+1} - x_n| < tolerance`, with `root.iterations = n + 1`
    /// * `Err` with `SolveError::ZeroDerivative` - `f'(x_n) == 0`, after `n` iterations
    /// * `Err` with `SolveError::MaxIterationsExceeded` - no convergence
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<Root<T>, Failure>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = x0;

        for iteration in 0..self.config.max_iterations {
            let f_val = f(x);
            let f_prime_val = f_prime(x);

            if f_prime_val == T::zero() {
                return Err(Failure {
                    error: SolveError::ZeroDerivative {
                        x: x.to_f64().unwrap_or(f64::NAN),
                    },
                    iterations: iteration,
                });
            }

            let next = x - f_val / f_prime_val;

            if (next - x).abs() < self.config.tolerance {
                return Ok(Root {
                    x: next,
                    iterations: iteration + 1,
                });
            }

            x = next;
        }

        Err(Failure {
            error: SolveError::MaxIterationsExceeded {
                iterations: self.config.max_iterations,
            },
            iterations: self.config.max_iterations,
        })
    }

    /// Like [`find_root`](Self::find_root), but rejects a converged value
    /// outside `[lower, upper]`.
    ///
    /// Intermediate iterates may leave the interval; only the final value
    /// is checked.
    pub fn find_root_within<F, G>(
        &self,
        f: F,
        f_prime: G,
        x0: T,
        lower: T,
        upper: T,
    ) -> Result<Root<T>, Failure>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let root = self.find_root(f, f_prime, x0)?;
        if root.x < lower || root.x > upper {
            return Err(Failure {
                error: SolveError::OutOfBounds {
                    x: root.x.to_f64().unwrap_or(f64::NAN),
                    a: lower.to_f64().unwrap_or(f64::NAN),
                    b: upper.to_f64().unwrap_or(f64::NAN),
                },
                iterations: root.iterations,
            });
        }
        Ok(root)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

/// Runs Newton-Raphson on a job's equation from seed `x0`.
///
/// The converged value must lie in `[job.a, job.b]`.
pub fn newton(job: &Job, x0: f64) -> Solution {
    let equation = PowerEquation::from_job(job);
    let solver = NewtonRaphsonSolver::new(SolverConfig::from(job));

    match solver.find_root_within(
        |x| equation.value(x),
        |x| equation.derivative(x),
        x0,
        job.a,
        job.b,
    ) {
        Ok(root) => Solution::root(job.id, root.x, root.iterations),
        Err(failure) => Solution::failure(job.id, failure.iterations, failure.error),
    }
}
