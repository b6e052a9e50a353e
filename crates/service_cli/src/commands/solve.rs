//! Solve command implementation
//!
//! Solves a single equation given on the command line.

use poweq_core::dispatch::{AttemptPolicy, Diagnostic, Engine, SolveReport, Strategy};
use poweq_core::types::{Job, Solution};
use tracing::{info, warn};

use crate::Result;

/// Run the solve command
pub fn run(job: &Job, strategy: Strategy, policy: AttemptPolicy) -> Result<SolveReport> {
    info!(
        equation = %format!("x^{:.2} = {:.2} * {:.2}^x", job.n, job.k, job.m),
        "Solving the equation"
    );
    info!(
        interval = %format!("[{}, {}]", job.a, job.b),
        tolerance = job.tol,
        max_iter = job.max_iter,
        %strategy,
        "Searching for solutions"
    );

    let report = Engine::new(policy).run(job, strategy)?;

    for diagnostic in &report.diagnostics {
        match diagnostic {
            Diagnostic::NoRealRoots { .. } => warn!(%diagnostic, "No solutions exist"),
            _ => info!(%diagnostic, "Pipeline decision"),
        }
    }

    for line in render(&report.solutions) {
        println!("{}", line);
    }
    if report.is_empty() {
        println!("no solutions found");
    }

    Ok(report)
}

fn render(solutions: &[Solution]) -> Vec<String> {
    solutions
        .iter()
        .map(|s| match &s.error {
            None => format!("x = {:.10}  (steps: {})", s.x, s.steps),
            Some(err) => format!("error: {}  (steps: {})", err, s.steps),
        })
        .collect()
}
