//! Handler for short URL deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::handlers::strip_route_slash;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping stored under a short URL.
///
/// # Endpoint
///
/// `DELETE {prefix}/{short_url}/`
///
/// # Errors
///
/// Returns 404 Not Found if the short URL doesn't exist.
pub async fn delete_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete(strip_route_slash(&short_url)).await?;

    Ok(StatusCode::NO_CONTENT)
}
