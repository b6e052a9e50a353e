//! Strategy selection and the solve pipeline.
//!
//! - `strategy`: [`Strategy`], parsed from algorithm names
//! - `dispatcher`: runs solvers over the candidates ([`solve`], [`dispatch`])
//! - `engine`: [`Engine`], the validate / edge case / existence / dispatch pipeline

pub mod dispatcher;
pub mod engine;
pub mod strategy;

pub use dispatcher::{dispatch, solve, solve_bisection, solve_newton, AttemptPolicy, Dispatch};
pub use engine::{Diagnostic, Engine, SolveReport};
pub use strategy::Strategy;
