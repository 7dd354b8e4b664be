//! Startup schema creation for the `urls` table.
//!
//! There is no migration system: the table is created with `IF NOT EXISTS`
//! every time the service starts. Both lookup columns are indexed through
//! their UNIQUE constraints.

use sqlx::PgPool;

const CREATE_URLS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS urls (
        id BIGSERIAL PRIMARY KEY,
        full_url TEXT NOT NULL,
        short_url TEXT NOT NULL,
        date_created TIMESTAMPTZ NOT NULL DEFAULT now(),
        CONSTRAINT urls_full_url_key UNIQUE (full_url),
        CONSTRAINT urls_short_url_key UNIQUE (short_url)
    )
"#;

/// Creates the `urls` table if it is absent.
///
/// Safe to call repeatedly.
///
/// # Errors
///
/// Returns the underlying database error if any statement fails.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(CREATE_URLS_TABLE).execute(&mut *tx).await?;

    tx.commit().await?;

    tracing::debug!("Schema for table `urls` is in place");
    Ok(())
}
