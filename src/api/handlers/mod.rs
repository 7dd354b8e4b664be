//! HTTP request handlers for API endpoints.

pub mod delete;
pub mod health;
pub mod redirect;
pub mod shorten;

pub use delete::delete_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;

/// Removes the single route-terminating `/` from a wildcard capture.
///
/// Only one slash is removed: `EFNP1MV//` becomes `EFNP1MV/`.
pub(crate) fn strip_route_slash(captured: &str) -> &str {
    captured.strip_suffix('/').unwrap_or(captured)
}
