//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping and commits it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the full URL (or the short URL) is
    /// already stored.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Finds the mapping stored under `short_url`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Deletes the mapping stored under `short_url` and commits.
    ///
    /// Returns the number of deleted rows (`0` when nothing matched).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_short_url(&self, short_url: &str) -> Result<u64, AppError>;

    /// Checks that the store answers queries.
    async fn ping(&self) -> Result<(), AppError>;
}
