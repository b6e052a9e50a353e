//! # poweq_batch: Batch Solving for poweq
//!
//! Reads job files, solves them on the rayon pool, and writes result files.
//!
//! - CSV job and result files (`records`)
//! - Parallel batch execution with [`BatchRunner`] (`runner`, `parallel`)
//! - Batch containers [`Batch`] and [`BatchEntry`] (`batch`)
//! - Seeded synthetic jobs (`generator`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use poweq_batch::{read_jobs, write_results, BatchRunner};
//! use poweq_core::dispatch::Strategy;
//!
//! let input = "Id,N,M,K,A,B,Tol,MaxIter\n1,2,2,1,0.5,10,1e-6,100\n";
//! let jobs = read_jobs(input.as_bytes()).unwrap();
//! let batch = BatchRunner::default().run(&jobs, Strategy::Auto);
//!
//! let mut out = Vec::new();
//! write_results(&mut out, &batch).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
//! ```

pub mod batch;
pub mod error;
pub mod generator;
pub mod parallel;
pub mod records;
pub mod runner;

pub use batch::{Batch, BatchEntry, BatchSummary};
pub use error::{BatchError, BatchResult};
pub use generator::{generate, JobGenerator};
pub use parallel::ParallelConfig;
pub use records::{
    read_jobs, read_jobs_from_path, write_jobs, write_jobs_to_path, write_results,
    write_results_to_path, JobRecord,
};
pub use runner::BatchRunner;
