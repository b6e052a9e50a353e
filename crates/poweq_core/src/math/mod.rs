//! Numerical building blocks.
//!
//! - `equation`: [`PowerEquation`], the target function `f` and its derivative
//! - `solvers`: Newton-Raphson and bisection root finders

pub mod equation;
pub mod solvers;

pub use equation::{residual, PowerEquation};
