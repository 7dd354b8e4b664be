//! URL shortening, resolution and deletion.

use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::probe::UrlProbe;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::short_code::generate_short_url;

const UNREACHABLE: &str = "Invalid or unreachable URL.";
const NOT_FOUND: &str = "Short URL not found.";

/// Service composing the reachability probe, short code generation and the
/// repository.
pub struct UrlService<R: UrlRepository> {
    repository: Arc<R>,
    probe: Arc<dyn UrlProbe>,
    short_url_domain: String,
}

impl<R: UrlRepository> UrlService<R> {
    /// Creates a new URL service.
    ///
    /// `short_url_domain` is prepended verbatim to every generated code.
    pub fn new(repository: Arc<R>, probe: Arc<dyn UrlProbe>, short_url_domain: String) -> Self {
        Self {
            repository,
            probe,
            short_url_domain,
        }
    }

    /// Shortens `full_url` and stores the mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unprocessable`] if the URL does not answer the
    /// reachability probe with a 2xx status.
    ///
    /// Returns [`AppError::Conflict`] if the URL has already been shortened.
    pub async fn shorten(&self, full_url: String) -> Result<UrlMapping, AppError> {
        if !self.probe.is_reachable(&full_url).await {
            tracing::debug!(full_url = %full_url, "Rejected unreachable URL");
            return Err(AppError::unprocessable(UNREACHABLE));
        }

        let short_url = generate_short_url(&self.short_url_domain, &full_url);

        let mapping = self
            .repository
            .create(NewUrlMapping {
                full_url,
                short_url,
            })
            .await?;

        tracing::info!(short_url = %mapping.short_url, full_url = %mapping.full_url, "Short URL created");
        Ok(mapping)
    }

    /// Looks up the mapping for a short URL or bare short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing is stored under it.
    pub async fn resolve(&self, short_url: &str) -> Result<UrlMapping, AppError> {
        let short_url = self.qualify(short_url);

        self.repository
            .find_by_short_url(&short_url)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }

    /// Deletes the mapping for a short URL or bare short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row was deleted.
    pub async fn delete(&self, short_url: &str) -> Result<(), AppError> {
        let short_url = self.qualify(short_url);

        let deleted = self.repository.delete_by_short_url(&short_url).await?;
        if deleted == 0 {
            return Err(AppError::not_found(NOT_FOUND));
        }

        tracing::info!(short_url = %short_url, "Short URL deleted");
        Ok(())
    }

    /// Checks that the backing store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Prefixes a bare short code with the configured domain.
    ///
    /// Values that already start with the domain are returned unchanged.
    fn qualify(&self, short_url: &str) -> String {
        if short_url.starts_with(&self.short_url_domain) {
            short_url.to_string()
        } else {
            format!("{}{}", self.short_url_domain, short_url)
        }
    }
}
