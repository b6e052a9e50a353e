//! Pre-solve analysis of a job.
//!
//! - `validation`: parameter checks ([`validate`])
//! - `edge_case`: closed forms for `m = 1` and `n = 0` ([`handle_edge_cases`])
//! - `existence`: the concavity-based root existence check ([`existence`])
//! - `candidates`: Newton seeds and bisection intervals around the critical point

pub mod candidates;
pub mod edge_case;
pub mod existence;
pub mod validation;

pub use candidates::{bisection_intervals, is_monotonic, newton_seeds, split_point, Interval};
pub use edge_case::{handle_edge_cases, EdgeCase, EdgeCaseSolution};
pub use existence::{existence, peak};
pub use validation::validate;
