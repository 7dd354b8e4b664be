//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`        - Health check (database)
//! - `{prefix}/*`          - URL API (default prefix `/api/v1/urls`)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//!
//! Paths are not normalised: short codes may end in `/`, so the terminal
//! slash is handled per route (see [`api::routes::url_routes`]).

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `api_prefix` - path the URL routes are nested under; `/` or an empty
///   string mounts them at the root
pub fn app_router(state: AppState, api_prefix: &str) -> Router {
    let prefix = api_prefix.trim_end_matches('/');
    let url_router = api::routes::url_routes();

    let router = Router::new().route("/health", get(health_handler));
    let router = if prefix.is_empty() {
        router.merge(url_router)
    } else {
        router.nest(prefix, url_router)
    };

    router.with_state(state).layer(tracing::layer())
}
