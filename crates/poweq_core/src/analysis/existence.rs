//! Root existence pre-check.

use crate::math::PowerEquation;
use crate::types::Job;

/// Returns `false` when `x^n = K m^x` has no real root at all.
///
/// For `m > 1` the function `f` is concave with its maximum at
/// `x_limit = n / ln(m)`. A negative maximum rules out any root. The check
/// ignores `[a, b]`: `true` means roots exist somewhere on `x > 0`.
///
/// Only meaningful for `m > 1`; degenerate jobs (`m = 1`) report `true` and
/// are left to [`handle_edge_cases`](super::handle_edge_cases).
///
/// # Examples
///
/// ```
/// use poweq_core::analysis::existence;
/// use poweq_core::types::Job;
///
/// // x^2 = e^x: 2 ln(x) - x peaks at 2 ln 2 - 2 < 0
/// assert!(!existence(&Job::new(1, 2.0, std::f64::consts::E, 1.0, 0.1, 10.0)));
/// // x^2 = 2^x: roots at 2 and 4
/// assert!(existence(&Job::new(2, 2.0, 2.0, 1.0, 0.1, 10.0)));
/// ```
pub fn existence(job: &Job) -> bool {
    peak(job).map_or(true, |peak| peak >= 0.0)
}

/// `f(x_limit)` for jobs with `m > 1`.
pub fn peak(job: &Job) -> Option<f64> {
    PowerEquation::from_job(job).peak()
}
