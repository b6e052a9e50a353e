//! Outcome of a single solve attempt.

use super::SolveError;

/// Result of one Newton seed or one bisection interval.
///
/// `error == None` means `x` is a root. When an error is present, `x`
/// holds [`Solution::SENTINEL_X`] and carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Identifier of the job this attempt belongs to.
    pub id: i64,
    /// Root estimate, or the sentinel on failure.
    pub x: f64,
    /// Iterations performed.
    pub steps: usize,
    /// Why the attempt failed, if it did.
    pub error: Option<SolveError>,
}

impl Solution {
    /// Value reported for `x` by failed attempts.
    pub const SENTINEL_X: f64 = -1.0;

    /// A converged root.
    pub fn root(id: i64, x: f64, steps: usize) -> Self {
        Self {
            id,
            x,
            steps,
            error: None,
        }
    }

    /// A failed attempt.
    pub fn failure(id: i64, steps: usize, error: SolveError) -> Self {
        Self {
            id,
            x: Self::SENTINEL_X,
            steps,
            error: Some(error),
        }
    }

    /// Returns `true` if this attempt produced a root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.error.is_none()
    }

    /// The root, if the attempt succeeded.
    pub fn value(&self) -> Option<f64> {
        self.is_root().then_some(self.x)
    }
}
