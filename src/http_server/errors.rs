//! HTTP error mapping
//!
//! Every store error reaches the client as a structured `{error, code}`
//! body with a status derived from its kind. Response bodies never
//! contain SQL text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::db::{QueryError, QueryErrorKind};
use crate::observability::Logger;
use crate::projection::ProjectionError;
use crate::store::StoreError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced at the HTTP boundary
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Resource not found
    #[error("resource not found")]
    NotFound,

    /// Database client failure
    #[error("{0}")]
    Query(#[from] QueryError),

    /// Row/column mismatch while shaping the result
    #[error("{0}")]
    Projection(#[from] ProjectionError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Query(e) => ApiError::Query(e),
            StoreError::Projection(e) => ApiError::Projection(e),
        }
    }
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Query(err) => match err.kind() {
                QueryErrorKind::Malformed => StatusCode::BAD_REQUEST,
                QueryErrorKind::ConstraintViolation => StatusCode::CONFLICT,
                QueryErrorKind::ConnectionLost | QueryErrorKind::Other => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::Projection(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.to_string();
        if status.is_server_error() {
            Logger::error("REQUEST_FAILED", &[("detail", detail.as_str())]);
        }
        let body = Json(ErrorResponse {
            error: detail,
            code: status.as_u16(),
        });
        (status, body).into_response()
    }
}
