//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::api::handlers::strip_route_slash;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short URL to its full URL.
///
/// # Endpoint
///
/// `GET {prefix}/{short_url}/`
///
/// `short_url` may contain slashes, so the stored value
/// (`http://short.domain/Lc4KTFBE`) can be passed as is. A bare code is
/// qualified with the configured domain.
///
/// # Errors
///
/// Returns 404 Not Found if the short URL doesn't exist.
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let mapping = state.url_service.resolve(strip_route_slash(&short_url)).await?;

    tracing::debug!(short_url = %mapping.short_url, "Redirecting");

    Ok(Redirect::temporary(&mapping.full_url))
}
