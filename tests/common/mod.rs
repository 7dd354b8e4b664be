#![allow(dead_code)]

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use urlhash::application::services::UrlService;
use urlhash::domain::probe::UrlProbe;
use urlhash::infrastructure::persistence::{PgUrlRepository, ensure_schema};
use urlhash::state::AppState;

pub const DOMAIN: &str = "http://short.test/";

/// Probe that answers the same way for every URL.
pub struct StaticProbe(pub bool);

#[async_trait]
impl UrlProbe for StaticProbe {
    async fn is_reachable(&self, _url: &str) -> bool {
        self.0
    }
}

pub async fn create_test_mapping(pool: &PgPool, full_url: &str, short_url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO urls (full_url, short_url) VALUES ($1, $2) RETURNING id")
        .bind(full_url)
        .bind(short_url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_state(pool: PgPool, reachable: bool) -> AppState {
    ensure_schema(&pool).await.unwrap();

    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    let probe: Arc<dyn UrlProbe> = Arc::new(StaticProbe(reachable));

    AppState::new(Arc::new(UrlService::new(
        repository,
        probe,
        DOMAIN.to_string(),
    )))
}
