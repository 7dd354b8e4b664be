//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::infrastructure::persistence::PgUrlRepository;

/// State shared by all request handlers.
///
/// Cloned per request; the service and the connection pool behind it are
/// reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<PgUrlRepository>>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService<PgUrlRepository>>) -> Self {
        Self { url_service }
    }
}
