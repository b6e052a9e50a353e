//! Job parameter validation.

use crate::types::{Job, ValidationError};

/// Checks a job's parameters before any solving.
///
/// Constraints are checked in a fixed order and the first violation is
/// returned: `n >= 0`, `m >= 1`, `k > 0`, `a >= 0`, `b > 0`, `a < b`,
/// `tol > 0`, `max_iter > 0`. NaN fails the first check it reaches.
///
/// # Examples
///
/// ```
/// use poweq_core::analysis::validate;
/// use poweq_core::types::{Job, ValidationError};
///
/// let job = Job::new(1, 2.0, 2.0, 1.0, 5.0, 2.0);
/// assert_eq!(
///     validate(&job),
///     Err(ValidationError::InvertedInterval { a: 5.0, b: 2.0 })
/// );
/// ```
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn validate(job: &Job) -> Result<(), ValidationError> {
    // Negated comparisons so that NaN is rejected.
    if !(job.n >= 0.0) {
        return Err(ValidationError::NegativeExponent(job.n));
    }
    if !(job.m >= 1.0) {
        return Err(ValidationError::BaseBelowOne(job.m));
    }
    if !(job.k > 0.0) {
        return Err(ValidationError::NonPositiveCoefficient(job.k));
    }
    if !(job.a >= 0.0) {
        return Err(ValidationError::NegativeLowerBound(job.a));
    }
    if !(job.b > 0.0) {
        return Err(ValidationError::NonPositiveUpperBound(job.b));
    }
    if !(job.a < job.b) {
        return Err(ValidationError::InvertedInterval { a: job.a, b: job.b });
    }
    if !(job.tol > 0.0) {
        return Err(ValidationError::NonPositiveTolerance(job.tol));
    }
    if job.max_iter == 0 {
        return Err(ValidationError::ZeroMaxIterations);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_job() -> Job {
        Job::new(1, 2.0, 2.0, 1.0, 0.1, 10.0)
    }

    #[test]
    fn test_valid_job_passes() {
        assert_eq!(validate(&valid_job()), Ok(()));
    }

    #[test]
    fn test_boundary_values_pass() {
        let job = Job {
            n: 0.0,
            m: 1.0,
            a: 0.0,
            ..valid_job()
        };
        assert_eq!(validate(&job), Ok(()));
    }

    #[test]
    fn test_each_constraint() {
        let base = valid_job();
        let cases = [
            (
                Job { n: -1.0, ..base },
                ValidationError::NegativeExponent(-1.0),
            ),
            (Job { m: 0.5, ..base }, ValidationError::BaseBelowOne(0.5)),
            (
                Job { k: 0.0, ..base },
                ValidationError::NonPositiveCoefficient(0.0),
            ),
            (
                Job { a: -0.1, ..base },
                ValidationError::NegativeLowerBound(-0.1),
            ),
            (
                Job {
                    a: 0.0,
                    b: 0.0,
                    ..base
                },
                ValidationError::NonPositiveUpperBound(0.0),
            ),
            (
                Job {
                    a: 5.0,
                    b: 2.0,
                    ..base
                },
                ValidationError::InvertedInterval { a: 5.0, b: 2.0 },
            ),
            (
                Job {
                    a: 3.0,
                    b: 3.0,
                    ..base
                },
                ValidationError::InvertedInterval { a: 3.0, b: 3.0 },
            ),
            (
                Job { tol: -1e-6, ..base },
                ValidationError::NonPositiveTolerance(-1e-6),
            ),
            (
                Job {
                    max_iter: 0,
                    ..base
                },
                ValidationError::ZeroMaxIterations,
            ),
        ];

        for (job, expected) in cases {
            assert_eq!(validate(&job), Err(expected));
        }
    }

    #[test]
    fn test_first_violation_wins() {
        let job = Job {
            n: -1.0,
            m: 0.0,
            k: -5.0,
            a: 5.0,
            b: 2.0,
            tol: 0.0,
            max_iter: 0,
            id: 1,
        };
        assert_eq!(validate(&job), Err(ValidationError::NegativeExponent(-1.0)));
    }

    #[test]
    fn test_nan_parameters_rejected() {
        let job = Job {
            k: f64::NAN,
            ..valid_job()
        };
        assert!(matches!(
            validate(&job),
            Err(ValidationError::NonPositiveCoefficient(k)) if k.is_nan()
        ));

        let job = Job {
            tol: f64::NAN,
            ..valid_job()
        };
        assert!(matches!(
            validate(&job),
            Err(ValidationError::NonPositiveTolerance(_))
        ));
    }
}
