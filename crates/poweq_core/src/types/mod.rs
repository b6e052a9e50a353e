//! Core data types.
//!
//! This module provides:
//! - `job`: the [`Job`] description and input [`JobDefaults`]
//! - `solution`: the per-attempt [`Solution`]
//! - `error`: [`SolveError`] and [`ValidationError`]

pub mod error;
pub mod job;
pub mod solution;

pub use error::{SolveError, ValidationError};
pub use job::{Job, JobDefaults};
pub use solution::Solution;
