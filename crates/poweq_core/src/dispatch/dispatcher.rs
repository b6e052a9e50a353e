//! Runs the selected solvers over every candidate.

use super::Strategy;
use crate::analysis::{bisection_intervals, newton_seeds};
use crate::math::solvers::{bisection, newton};
use crate::types::{Job, Solution};

/// Which attempts the dispatcher keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttemptPolicy {
    /// Keep every attempt, successful or not.
    #[default]
    ReportAll,
    /// Keep only attempts that produced a root.
    SuccessesOnly,
}

impl AttemptPolicy {
    fn apply(self, attempts: Vec<Solution>) -> (Vec<Solution>, usize) {
        match self {
            AttemptPolicy::ReportAll => (attempts, 0),
            AttemptPolicy::SuccessesOnly => {
                let total = attempts.len();
                let kept: Vec<Solution> = attempts.into_iter().filter(Solution::is_root).collect();
                let dropped = total - kept.len();
                (kept, dropped)
            }
        }
    }
}

/// What the dispatcher did, besides the solutions themselves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dispatch {
    /// Ordered results
    pub solutions: Vec<Solution>,
    /// Attempts removed by [`AttemptPolicy::SuccessesOnly`]
    pub dropped: usize,
    /// `Auto` fell back to bisection
    pub fell_back: bool,
}

/// Newton from every seed, in seed order.
pub fn solve_newton(job: &Job) -> Vec<Solution> {
    newton_seeds(job)
        .into_iter()
        .map(|seed| newton(job, seed))
        .collect()
}

/// Bisection over every interval, in interval order.
pub fn solve_bisection(job: &Job) -> Vec<Solution> {
    bisection_intervals(job)
        .into_iter()
        .map(|interval| bisection(job, interval.lower, interval.upper))
        .collect()
}

/// Runs `strategy` on a job and returns one result per attempt.
///
/// Skips validation, edge cases and the existence check; see
/// [`Engine`](super::Engine) for the full pipeline.
///
/// # Examples
///
/// ```
/// use poweq_core::dispatch::{solve, Strategy};
/// use poweq_core::types::Job;
///
/// let job = Job::new(1, 2.0, std::f64::consts::E, 0.1, 0.1, 10.0);
/// let results = solve(&job, Strategy::Bisection);
/// assert_eq!(results.len(), 2);
/// assert!(results.iter().all(|r| r.is_root()));
/// ```
pub fn solve(job: &Job, strategy: Strategy) -> Vec<Solution> {
    dispatch(job, strategy, AttemptPolicy::ReportAll).solutions
}

/// Runs `strategy` under an attempt policy.
///
/// With `Auto`, bisection runs whenever no Newton attempt produced a root.
/// The failed Newton attempts stay in front of the bisection results, then
/// the policy is applied to the combined list.
pub fn dispatch(job: &Job, strategy: Strategy, policy: AttemptPolicy) -> Dispatch {
    let (attempts, fell_back) = match strategy {
        Strategy::Newton => (solve_newton(job), false),
        Strategy::Bisection => (solve_bisection(job), false),
        Strategy::Auto => {
            let mut attempts = solve_newton(job);
            if attempts.iter().any(Solution::is_root) {
                (attempts, false)
            } else {
                attempts.extend(solve_bisection(job));
                (attempts, true)
            }
        }
    };

    let (solutions, dropped) = policy.apply(attempts);
    Dispatch {
        solutions,
        dropped,
        fell_back,
    }
}
