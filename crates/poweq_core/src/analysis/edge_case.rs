//! Closed-form solutions for degenerate parameterisations.
//!
//! With `m = 1` the exponential term is constant and the equation becomes
//! `x^n = K`; with `n = 0` the power term is constant and it becomes
//! `1 = K m^x`. In both cases `ln(m)` or `n` vanishes, so the critical-point
//! analysis does not apply and these cases must be handled first.

use crate::types::{Job, SolveError, Solution};

/// Which degenerate form a job reduced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeCase {
    /// `m = 1`: `x = K^(1/n)`.
    UnitBase,
    /// `n = 0`: `x = -ln(K) / ln(m)`.
    ZeroExponent,
    /// `m = 1` and `n = 0`: the equation reads `1 = K`. Any point solves it
    /// when `K = 1`; the midpoint of `[a, b]` is reported.
    Constant,
}

impl std::fmt::Display for EdgeCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeCase::UnitBase => write!(f, "m = 1"),
            EdgeCase::ZeroExponent => write!(f, "n = 0"),
            EdgeCase::Constant => write!(f, "m = 1, n = 0"),
        }
    }
}

/// The unique outcome of a degenerate job.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeCaseSolution {
    /// Which closed form applied
    pub case: EdgeCase,
    /// The root (steps = 0), or a `NoSolutionInRange` failure
    pub solution: Solution,
}

/// Solves a degenerate job in closed form.
///
/// Returns `None` when the job is not degenerate and needs iterative
/// solving. A closed-form value outside `[a, b]` is reported as
/// [`SolveError::NoSolutionInRange`] instead of being returned as a root.
///
/// # Examples
///
/// ```
/// use poweq_core::analysis::handle_edge_cases;
/// use poweq_core::types::Job;
///
/// // x^2 = 25
/// let job = Job::new(1, 2.0, 1.0, 25.0, 0.0, 10.0);
/// let outcome = handle_edge_cases(&job).unwrap();
/// assert!((outcome.solution.value().unwrap() - 5.0).abs() < 1e-12);
/// assert_eq!(outcome.solution.steps, 0);
/// ```
pub fn handle_edge_cases(job: &Job) -> Option<EdgeCaseSolution> {
    let (case, x) = if job.m == 1.0 && job.n == 0.0 {
        // 1 = K holds everywhere or nowhere; the midpoint keeps x > 0
        let x = if job.k == 1.0 {
            (job.a + job.b) / 2.0
        } else {
            f64::INFINITY
        };
        (EdgeCase::Constant, x)
    } else if job.m == 1.0 {
        (EdgeCase::UnitBase, job.k.powf(1.0 / job.n))
    } else if job.n == 0.0 {
        (EdgeCase::ZeroExponent, -job.k.ln() / job.m.ln())
    } else {
        return None;
    };

    let solution = if x < job.a || x > job.b || x.is_nan() {
        Solution::failure(
            job.id,
            0,
            SolveError::NoSolutionInRange {
                x,
                a: job.a,
                b: job.b,
            },
        )
    } else {
        Solution::root(job.id, x, 0)
    };

    Some(EdgeCaseSolution { case, solution })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_base_in_range() {
        let job = Job::new(1, 2.0, 1.0, 25.0, 0.0, 10.0);
        let outcome = handle_edge_cases(&job).unwrap();

        assert_eq!(outcome.case, EdgeCase::UnitBase);
        assert_relative_eq!(outcome.solution.value().unwrap(), 5.0, epsilon = 1e-12);
        assert_eq!(outcome.solution.steps, 0);
        assert_eq!(outcome.solution.id, 1);
    }

    #[test]
    fn test_unit_base_out_of_range() {
        let job = Job::new(2, 2.0, 1.0, 25.0, 0.0, 4.0);
        let outcome = handle_edge_cases(&job).unwrap();

        assert_eq!(outcome.solution.x, Solution::SENTINEL_X);
        match outcome.solution.error {
            Some(SolveError::NoSolutionInRange { x, a, b }) => {
                assert_relative_eq!(x, 5.0, epsilon = 1e-12);
                assert_eq!((a, b), (0.0, 4.0));
            }
            other => panic!("Expected NoSolutionInRange, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_exponent_out_of_range() {
        // -ln(8) / ln(2) = -3
        let job = Job::new(3, 0.0, 2.0, 8.0, 0.0, 10.0);
        let outcome = handle_edge_cases(&job).unwrap();

        assert_eq!(outcome.case, EdgeCase::ZeroExponent);
        match outcome.solution.error {
            Some(SolveError::NoSolutionInRange { x, .. }) => {
                assert_relative_eq!(x, -3.0, epsilon = 1e-12)
            }
            other => panic!("Expected NoSolutionInRange, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_exponent_in_range() {
        // 1 = (1/8) 2^x  =>  x = 3
        let job = Job::new(4, 0.0, 2.0, 0.125, 0.0, 10.0);
        let outcome = handle_edge_cases(&job).unwrap();

        let x = outcome.solution.value().unwrap();
        assert_relative_eq!(x, 3.0, epsilon = 1e-12);
        assert_eq!(outcome.solution.steps, 0);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        // x^1 = 5
        let job = Job::new(5, 1.0, 1.0, 5.0, 5.0, 10.0);
        assert!(handle_edge_cases(&job).unwrap().solution.is_root());

        let job = Job::new(6, 1.0, 1.0, 5.0, 0.0, 5.0);
        assert!(handle_edge_cases(&job).unwrap().solution.is_root());
    }

    #[test]
    fn test_constant_equation() {
        let job = Job::new(7, 0.0, 1.0, 1.0, 0.5, 10.0);
        let outcome = handle_edge_cases(&job).unwrap();
        assert_eq!(outcome.case, EdgeCase::Constant);
        assert_eq!(outcome.solution.value(), Some(5.25));

        let job = Job::new(8, 0.0, 1.0, 0.5, 0.0, 10.0);
        let outcome = handle_edge_cases(&job).unwrap();
        assert!(matches!(
            outcome.solution.error,
            Some(SolveError::NoSolutionInRange { .. })
        ));
    }

    #[test]
    fn test_constant_root_has_finite_residual() {
        // x = a = 0 would give 0 * ln(0) = NaN
        let job = Job::new(10, 0.0, 1.0, 1.0, 0.0, 4.0);
        let x = handle_edge_cases(&job).unwrap().solution.value().unwrap();
        assert_eq!(x, 2.0);
        assert_eq!(crate::math::residual(&job, x), 0.0);
    }

    #[test]
    fn test_regular_job_is_not_an_edge_case() {
        let job = Job::new(9, 2.0, 2.0, 1.0, 0.1, 10.0);
        assert_eq!(handle_edge_cases(&job), None);
    }
}
