//! REST API server for the poweq root finder
//!
//! Exposes single and batch solving of `x^n = K * m^x` over HTTP.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
