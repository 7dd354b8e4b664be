//! Handler for the shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates the short URL for a full URL.
///
/// # Endpoint
///
/// `POST {prefix}/shorten/`
///
/// # Request Body
///
/// ```json
/// { "full_url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "short_url": "http://short.domain/BCSXTGhT" }
/// ```
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if the body is not valid JSON of the
/// expected shape, or if the URL is malformed or unreachable.
/// Returns 409 Conflict if the URL has already been shortened.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let mapping = state.url_service.shorten(payload.full_url).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: mapping.short_url,
        }),
    ))
}
