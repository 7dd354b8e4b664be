//! Application error type and its HTTP representation.
//!
//! Every failure that reaches a handler is an [`AppError`]. Each variant maps
//! to one status code and renders as `{"detail": "..."}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::utils::db_error;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The input URL is malformed or did not answer the reachability probe.
    #[error("{0}")]
    Unprocessable(String),

    #[error("{0}")]
    NotFound(String),

    /// A row with the same full URL (or short URL) already exists.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::Unprocessable(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if db_error::is_short_url_collision(&e) {
            tracing::warn!(error = %e, "Short code collision between distinct URLs");
            return AppError::conflict("Short URL collides with an existing entry.");
        }

        if db_error::is_unique_violation(&e) {
            return AppError::conflict("Short URL already exists.");
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error")
    }
}

/// Unreadable request bodies (bad JSON, wrong shape, missing
/// `Content-Type: application/json`) are all 422.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(status = %rejection.status(), "Rejected request body");
        AppError::unprocessable(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(_: ValidationErrors) -> Self {
        AppError::unprocessable("Invalid or unreachable URL.")
    }
}
