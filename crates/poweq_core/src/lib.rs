//! # poweq_core: Root Finder for `x^n = K * m^x`
//!
//! Finds every root of `x^n = K m^x` on a bounded interval `[a, b]` with
//! `n >= 0`, `m >= 1` and `K > 0`. The engine works on the log form
//!
//! ```text
//! f(x) = n ln(x) - ln(K) - x ln(m)
//! ```
//!
//! which is concave for `m > 1` and peaks at `x_limit = n / ln(m)`, so there
//! are at most two roots and each side of `x_limit` is searched separately.
//!
//! ## Modules
//!
//! - Job, result and error types (`types`)
//! - The equation and generic Newton-Raphson / bisection solvers (`math`)
//! - Validation, closed-form edge cases, existence, candidates (`analysis`)
//! - Strategy selection and the [`Engine`](dispatch::Engine) pipeline (`dispatch`)
//!
//! The crate is pure: no I/O, no logging, no global state. Decisions a caller
//! may want to log come back as [`Diagnostic`](dispatch::Diagnostic)s.
//!
//! ## Usage Examples
//!
//! ```rust
//! use poweq_core::dispatch::{Engine, Strategy};
//! use poweq_core::types::Job;
//!
//! // x^2 = 2^x has roots at 2 and 4
//! let job = Job::new(1, 2.0, 2.0, 1.0, 0.5, 10.0);
//! let report = Engine::default().run(&job, Strategy::Auto).unwrap();
//! let roots = report.root_values();
//! assert_eq!(roots.len(), 2);
//! assert!((roots[0] - 2.0).abs() < 1e-6);
//! assert!((roots[1] - 4.0).abs() < 1e-6);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialize/Deserialize for `Job` and `Strategy`

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analysis;
pub mod dispatch;
pub mod math;
pub mod types;
