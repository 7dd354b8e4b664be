//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for URL mappings.
///
/// Write operations run inside a transaction that is committed before the
/// method returns; an early return drops the transaction, which rolls it back
/// and hands the connection back to the pool.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mut tx = self.pool.begin().await?;

        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO urls (full_url, short_url)
            VALUES ($1, $2)
            RETURNING id, full_url, short_url, date_created
            "#,
        )
        .bind(&new_mapping.full_url)
        .bind(&new_mapping.short_url)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(mapping)
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, full_url, short_url, date_created
            FROM urls
            WHERE short_url = $1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn delete_by_short_url(&self, short_url: &str) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM urls WHERE short_url = $1")
            .bind(short_url)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
