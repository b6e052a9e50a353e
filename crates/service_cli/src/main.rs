//! poweq CLI - Command Line Root Finder for `x^n = K * m^x`
//!
//! # Commands
//!
//! - `poweq solve -n 2 -m 2 -K 1` - Solve one equation
//! - `poweq scan --in jobs.csv --out solutions.csv` - Solve every job in a CSV file
//! - `poweq generate -N 50 --out jobs.csv` - Write random solvable jobs
//!
//! `RUST_LOG` overrides the log level chosen by `--verbose`.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use poweq_core::dispatch::{AttemptPolicy, Strategy};
use poweq_core::types::{Job, JobDefaults};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Root finder for x^n = K * m^x on a bounded interval
#[derive(Parser)]
#[command(name = "poweq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the solving commands
#[derive(Args, Clone, Copy)]
struct SolverOptions {
    /// Algorithm: newton, bisection or auto
    #[arg(long = "alg", default_value = "auto")]
    algorithm: Strategy,

    /// Report only attempts that found a root
    #[arg(long)]
    successes_only: bool,
}

impl SolverOptions {
    fn policy(&self) -> AttemptPolicy {
        if self.successes_only {
            AttemptPolicy::SuccessesOnly
        } else {
            AttemptPolicy::ReportAll
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single equation
    Solve {
        /// Exponent n
        #[arg(
            short = 'n',
            default_value_t = JobDefaults::default().n,
            allow_negative_numbers = true
        )]
        n: f64,

        /// Base m
        #[arg(
            short = 'm',
            default_value_t = JobDefaults::default().m,
            allow_negative_numbers = true
        )]
        m: f64,

        /// Coefficient K
        #[arg(
            short = 'K', long = "k",
            default_value_t = JobDefaults::default().k,
            allow_negative_numbers = true
        )]
        k: f64,

        /// Lower bound of the search interval
        #[arg(
            short = 'a',
            default_value_t = JobDefaults::default().a,
            allow_negative_numbers = true
        )]
        a: f64,

        /// Upper bound of the search interval
        #[arg(
            short = 'b',
            default_value_t = JobDefaults::default().b,
            allow_negative_numbers = true
        )]
        b: f64,

        /// Convergence tolerance
        #[arg(long, default_value_t = JobDefaults::default().tol)]
        tol: f64,

        /// Iteration cap per attempt
        #[arg(long, alias = "maxIter", default_value_t = JobDefaults::default().max_iter)]
        max_iter: usize,

        #[command(flatten)]
        solver: SolverOptions,
    },

    /// Solve every job in a CSV file
    Scan {
        /// Job file with columns Id,N,M,K,A,B,Tol,MaxIter
        #[arg(long = "in", default_value = "jobs.csv")]
        input: PathBuf,

        /// Result file
        #[arg(long = "out", default_value = "solutions.csv")]
        output: PathBuf,

        #[command(flatten)]
        solver: SolverOptions,
    },

    /// Generate random jobs that have real roots
    Generate {
        /// Number of jobs
        #[arg(short = 'N', long = "count", default_value_t = 50)]
        count: usize,

        /// Job file to write
        #[arg(long = "out", default_value = "jobs.csv")]
        output: PathBuf,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let start = Instant::now();
    match cli.command {
        Commands::Solve {
            n,
            m,
            k,
            a,
            b,
            tol,
            max_iter,
            solver,
        } => {
            let job = Job::new(0, n, m, k, a, b)
                .with_tolerance(tol)
                .with_max_iter(max_iter);
            commands::solve::run(&job, solver.algorithm, solver.policy())?;
        }
        Commands::Scan {
            input,
            output,
            solver,
        } => {
            commands::scan::run(&input, &output, solver.algorithm, solver.policy())?;
        }
        Commands::Generate {
            count,
            output,
            seed,
        } => {
            commands::generate::run(count, &output, seed)?;
        }
    }

    info!(elapsed = ?start.elapsed(), "Execution time");
    Ok(())
}
