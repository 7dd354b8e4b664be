//! HTTP server initialization and runtime setup.
//!
//! Owns the connection pool lifecycle: the pool is opened and the schema
//! ensured before the listener binds, and the pool is closed after the server
//! has drained on shutdown.

use crate::application::services::UrlService;
use crate::config::Config;
use crate::domain::probe::UrlProbe;
use crate::infrastructure::http::HttpProbe;
use crate::infrastructure::persistence::{PgUrlRepository, ensure_schema};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use log::LevelFilter;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the PostgreSQL connection pool described by `config`.
///
/// With `db_echo` set, every statement is logged at `info`; otherwise
/// statements are logged at `debug`.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed or the database is unreachable.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let statement_level = if config.db_echo {
        LevelFilter::Info
    } else {
        LevelFilter::Debug
    };

    let options = PgConnectOptions::from_str(&config.database_url)
        .context("Invalid database URL")?
        .log_statements(statement_level);

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - `urls` table (created if absent)
/// - Reachability probe client
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or schema creation fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = Arc::new(connect_pool(&config).await?);
    tracing::info!("Connected to database");

    ensure_schema(&pool)
        .await
        .context("Failed to create schema")?;

    let probe: Arc<dyn UrlProbe> =
        Arc::new(HttpProbe::new().context("Failed to build HTTP client")?);

    let repository = Arc::new(PgUrlRepository::new(pool.clone()));
    let url_service = Arc::new(UrlService::new(
        repository,
        probe,
        config.short_url_domain.clone(),
    ));

    let state = AppState::new(url_service);
    let app = app_router(state, &config.api_prefix);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Database pool closed");

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
