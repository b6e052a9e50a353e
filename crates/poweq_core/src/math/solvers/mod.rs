//! Root-finding solvers.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: quadratic convergence from a single seed
//! - [`BisectionSolver`]: guaranteed progress on a sign-changing interval
//!
//! Both are generic over [`num_traits::Float`] and take the function as a
//! closure. The job-level entry points [`newton`] and [`bisection`] wire
//! them to a [`Job`](crate::types::Job)'s equation and turn the outcome into
//! a [`Solution`](crate::types::Solution).
//!
//! ## Configuration
//!
//! Both solvers use [`SolverConfig`]:
//! - `tolerance`: convergence tolerance (default: 1e-6)
//! - `max_iterations`: iteration cap (default: 100)
//!
//! ## Examples
//!
//! ```
//! use poweq_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig};
//!
//! let config = SolverConfig::new(1e-10, 100);
//! let f = |x: f64| x * x * x - x - 2.0;
//! let f_prime = |x: f64| 3.0 * x * x - 1.0;
//!
//! let newton = NewtonRaphsonSolver::new(config).find_root(f, f_prime, 1.5).unwrap();
//! let bisect = BisectionSolver::new(config).find_root(f, 1.0, 2.0).unwrap();
//! assert!((newton.x - bisect.x).abs() < 1e-8);
//! ```

mod bisection;
mod config;
mod newton_raphson;

pub use bisection::{bisection, BisectionSolver};
pub use config::SolverConfig;
pub use newton_raphson::{newton, NewtonRaphsonSolver};

use crate::types::SolveError;

/// A converged root and the iterations it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root<T> {
    /// Root estimate
    pub x: T,
    /// Iterations performed
    pub iterations: usize,
}

/// A failed solve and the iterations performed before it stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    /// Why the solver stopped
    pub error: SolveError,
    /// Iterations performed
    pub iterations: usize,
}
