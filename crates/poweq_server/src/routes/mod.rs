//! Route modules for the poweq server
//!
//! - solve: single and batch solve endpoints
//! - health: health check and readiness endpoints

pub mod health;
pub mod solve;

use axum::Router;
use poweq_batch::{BatchRunner, ParallelConfig};
use poweq_core::dispatch::Engine;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
    /// Pipeline for single solves
    pub engine: Engine,
    /// Runner for batch solves, sharing the engine's policy
    pub runner: Arc<BatchRunner>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let engine = Engine::new(config.attempt_policy());
        Self {
            runner: Arc::new(BatchRunner::new(engine, ParallelConfig::default())),
            engine,
            config,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let state = AppState::new(config);

    Router::new()
        .merge(health::routes())
        .merge(solve::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
