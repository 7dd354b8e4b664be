//! API route configuration.

use crate::api::handlers::{delete_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// URL routes, mounted under the configured prefix.
///
/// # Endpoints
///
/// - `POST   /shorten[/]`    - Create a short URL
/// - `GET    /{*short_url}`  - Redirect to the full URL
/// - `DELETE /{*short_url}`  - Delete a short URL
///
/// The wildcard captures the terminal `/` of `/{short_url}/`; handlers strip
/// exactly one, so codes ending in `/` survive.
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/shorten/", post(shorten_handler))
        .route(
            "/{*short_url}",
            get(redirect_handler).delete(delete_handler),
        )
}
