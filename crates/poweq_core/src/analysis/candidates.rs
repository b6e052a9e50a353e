//! Newton seeds and bisection intervals from the critical point.
//!
//! `x_limit = n / ln(m)` splits `f` into an increasing branch on
//! `(0, x_limit]` and a decreasing branch on `[x_limit, inf)`. Each branch
//! holds at most one root, so each gets its own seed or interval.

use crate::math::PowerEquation;
use crate::types::Job;

/// A closed search interval `[lower, upper]` for bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower end
    pub lower: f64,
    /// Upper end
    pub upper: f64,
}

impl Interval {
    /// Creates `[lower, upper]`.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

/// `x_limit`, or `+inf` when it is undefined (`m <= 1`) so that the whole
/// interval counts as monotonic.
pub fn split_point(job: &Job) -> f64 {
    PowerEquation::from_job(job)
        .critical_point()
        .unwrap_or(f64::INFINITY)
}

/// `true` when `x_limit` does not fall strictly inside `(a, b)`, so `f` is
/// monotonic over the whole interval.
pub fn is_monotonic(job: &Job) -> bool {
    let x_limit = split_point(job);
    x_limit >= job.b || x_limit <= job.a
}

/// Starting points for Newton-Raphson, in branch order.
///
/// One seed `(a + b) / 2` if [`is_monotonic`]; otherwise `a + x_limit / 10`
/// and `(x_limit + b) / 2`, both kept away from the singular derivative at
/// `x_limit`.
///
/// # Examples
///
/// ```
/// use poweq_core::analysis::newton_seeds;
/// use poweq_core::types::Job;
///
/// // x_limit = 2
/// let job = Job::new(1, 2.0, std::f64::consts::E, 0.1, 0.1, 10.0);
/// let seeds = newton_seeds(&job);
/// assert_eq!(seeds.len(), 2);
/// assert!((seeds[0] - 0.3).abs() < 1e-12);
/// assert!((seeds[1] - 6.0).abs() < 1e-12);
/// ```
pub fn newton_seeds(job: &Job) -> Vec<f64> {
    if is_monotonic(job) {
        return vec![(job.a + job.b) / 2.0];
    }
    let x_limit = split_point(job);
    vec![job.a + x_limit / 10.0, (x_limit + job.b) / 2.0]
}

/// Monotonic sub-intervals for bisection, in branch order.
///
/// `[a, b]` if [`is_monotonic`]; otherwise `[a, x_limit]` and
/// `[x_limit, b]`. A sign change on each interval is likely but not
/// guaranteed.
pub fn bisection_intervals(job: &Job) -> Vec<Interval> {
    if is_monotonic(job) {
        return vec![Interval::new(job.a, job.b)];
    }
    let x_limit = split_point(job);
    vec![
        Interval::new(job.a, x_limit),
        Interval::new(x_limit, job.b),
    ]
}
