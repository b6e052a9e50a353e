//! Solve endpoints
//!
//! - `POST /solve`: one job, every attempt in the response
//! - `POST /solve/batch`: many jobs on the rayon pool, one entry per job

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use poweq_batch::Batch;
use poweq_core::dispatch::{SolveReport, Strategy};
use poweq_core::types::{Job, JobDefaults, SolveError, Solution};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::ApiError;

/// Equation parameters shared by single and batch requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobParams {
    /// Job id; defaults to 0 for `/solve` and the position (from 1) in a batch
    #[serde(default)]
    pub id: Option<i64>,
    pub n: f64,
    pub m: f64,
    pub k: f64,
    pub a: f64,
    pub b: f64,
    /// Defaults to 1e-6
    #[serde(default)]
    pub tolerance: Option<f64>,
    /// Defaults to 100
    #[serde(default)]
    pub max_iter: Option<usize>,
}

impl JobParams {
    /// Builds the job, filling unset controls from [`JobDefaults`].
    pub fn to_job(&self, default_id: i64) -> Job {
        let defaults = JobDefaults::default();
        Job::new(
            self.id.unwrap_or(default_id),
            self.n,
            self.m,
            self.k,
            self.a,
            self.b,
        )
        .with_tolerance(self.tolerance.unwrap_or(defaults.tol))
        .with_max_iter(self.max_iter.unwrap_or(defaults.max_iter))
    }
}

/// Body of `POST /solve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    #[serde(flatten)]
    pub params: JobParams,
    /// `newton`, `bisection` or `auto`; the server default when absent
    #[serde(default)]
    pub algorithm: Option<String>,
}

/// One attempt as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSolution {
    pub x: f64,
    pub steps: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&Solution> for ApiSolution {
    fn from(solution: &Solution) -> Self {
        Self {
            x: solution.x,
            steps: solution.steps,
            error: solution.error.as_ref().map(ToString::to_string),
        }
    }
}

/// Body of a successful `POST /solve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
    pub solutions: Vec<ApiSolution>,
    /// Pipeline decisions, e.g. a closed-form edge case
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<String>,
}

impl From<&SolveReport> for SolveResponse {
    fn from(report: &SolveReport) -> Self {
        Self {
            solutions: report.solutions.iter().map(ApiSolution::from).collect(),
            diagnostics: report.diagnostics.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Body of `POST /solve/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub jobs: Vec<JobParams>,
    /// Applies to every job
    #[serde(default)]
    pub algorithm: Option<String>,
}

/// Results for one job of a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchJobResult {
    pub id: i64,
    pub solutions: Vec<ApiSolution>,
}

/// Body of a successful `POST /solve/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    pub algorithm: String,
    pub results: Vec<BatchJobResult>,
}

impl From<&Batch> for BatchResponse {
    fn from(batch: &Batch) -> Self {
        Self {
            algorithm: batch.strategy.to_string(),
            results: batch
                .entries
                .iter()
                .map(|entry| BatchJobResult {
                    id: entry.job.id,
                    solutions: entry.solutions.iter().map(ApiSolution::from).collect(),
                })
                .collect(),
        }
    }
}

/// Build the solve routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/solve", post(solve_handler))
        .route("/solve/batch", post(solve_batch_handler))
}

fn resolve_algorithm(requested: Option<&str>, default: Strategy) -> Result<Strategy, ApiError> {
    match requested {
        Some(name) => Ok(name.parse::<Strategy>()?),
        None => Ok(default),
    }
}

/// POST /solve
async fn solve_handler(
    State(state): State<AppState>,
    payload: Result<Json<SolveRequest>, JsonRejection>,
) -> Result<Json<SolveResponse>, ApiError> {
    let Json(request) = payload.map_err(|r| ApiError::InvalidRequest(r.body_text()))?;
    let strategy = resolve_algorithm(request.algorithm.as_deref(), state.config.default_algorithm)?;
    let job = request.params.to_job(0);

    let report = state.engine.run(&job, strategy)?;
    if report.is_empty() {
        return Err(SolveError::NoSolutionsFound.into());
    }

    tracing::info!(
        job_id = job.id,
        %strategy,
        attempts = report.solutions.len(),
        roots = report.roots().count(),
        "solved"
    );
    Ok(Json(SolveResponse::from(&report)))
}

/// POST /solve/batch
async fn solve_batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<BatchResponse>, ApiError> {
    let Json(request) = payload.map_err(|r| ApiError::InvalidRequest(r.body_text()))?;

    let max = state.config.max_batch_size;
    if request.jobs.len() > max {
        return Err(ApiError::BatchTooLarge {
            size: request.jobs.len(),
            max,
        });
    }
    let strategy = resolve_algorithm(request.algorithm.as_deref(), state.config.default_algorithm)?;

    let jobs: Vec<Job> = request
        .jobs
        .iter()
        .enumerate()
        .map(|(index, params)| params.to_job(index as i64 + 1))
        .collect();

    let runner = state.runner.clone();
    let batch = tokio::task::spawn_blocking(move || runner.run(&jobs, strategy))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(BatchResponse::from(&batch)))
}
