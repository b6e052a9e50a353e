//! API error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use poweq_core::types::SolveError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body is not valid JSON for the endpoint.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The solver rejected the job before or instead of solving it.
    #[error(transparent)]
    Solve(#[from] SolveError),

    /// More jobs than `max_batch_size`.
    #[error("batch of {size} jobs exceeds the limit of {max}")]
    BatchTooLarge { size: usize, max: usize },

    /// A worker task died.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable kind
    pub error: String,
    /// Human-readable message
    pub message: String,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Solve(SolveError::NoSolutionsFound) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Solve(_) => StatusCode::BAD_REQUEST,
            ApiError::BatchTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::Solve(err) => err.kind(),
            ApiError::BatchTooLarge { .. } => "batch_too_large",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poweq_core::types::ValidationError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(SolveError::from(ValidationError::ZeroMaxIterations)).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(SolveError::UnknownAlgorithm("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(SolveError::NoSolutionsFound).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::BatchTooLarge { size: 2, max: 1 }.status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn test_message_is_solver_message() {
        let err = ApiError::from(SolveError::NoSolutionsFound);
        assert_eq!(err.to_string(), "no solutions found");
        assert_eq!(err.kind(), "no_solutions_found");
    }
}
