//! Stub API Error Types
//!
//! Error conversion to HTTP responses carrying the `{error}` body the
//! clients expect.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Stub API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request is missing data or carries unusable values
    #[error("{0}")]
    BadRequest(String),

    /// Login failed
    #[error("{0}")]
    Unauthorized(String),

    /// Resource already exists
    #[error("{0}")]
    Conflict(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub request_id: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) | ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::warn!(
            request_id = %request_id,
            status = %status.as_u16(),
            error_message = %self,
            "Stub API request rejected"
        );

        let body = ErrorResponse {
            error: self.to_string(),
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for stub handlers
pub type ApiResult<T> = Result<T, ApiError>;
