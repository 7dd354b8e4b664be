//! CLI administration tool for urlhash.
//!
//! Inspects and maintains the `urls` table without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Preview the short URL a full URL would get (no database needed)
//! cargo run --bin admin -- url code https://example.com/a
//!
//! # Look up or delete a stored short URL (bare codes are accepted)
//! cargo run --bin admin -- url show Lc4KTFBE
//! cargo run --bin admin -- url delete Lc4KTFBE
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Database tools
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db init
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `POSTGRES_*` components: PostgreSQL connection
//! - `SHORT_URL_DOMAIN`: prefix used to build and qualify short URLs

use urlhash::application::services::UrlService;
use urlhash::config::Config;
use urlhash::domain::probe::UrlProbe;
use urlhash::infrastructure::http::HttpProbe;
use urlhash::infrastructure::persistence::{PgUrlRepository, ensure_schema};
use urlhash::utils::short_code::generate_short_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing urlhash.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Work with stored URLs
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// URL subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Print the short URL a full URL maps to
    Code {
        full_url: String,

        /// Domain prefix (defaults to SHORT_URL_DOMAIN)
        #[arg(short, long)]
        domain: Option<String>,
    },

    /// Show the mapping stored under a short URL or code
    Show { short_url: String },

    /// Delete the mapping stored under a short URL or code
    Delete {
        short_url: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Create the `urls` table if it does not exist
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Url { action } => handle_url_action(action).await?,
        Commands::Stats => {
            let pool = connect().await?;
            handle_stats(&pool).await?;
            pool.close().await;
        }
        Commands::Db { action } => {
            let pool = connect().await?;
            handle_db_action(action, &pool).await?;
            pool.close().await;
        }
    }

    Ok(())
}

/// Connects to the database configured in the environment.
async fn connect() -> Result<PgPool> {
    let database_url = Config::load_database_url()?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Dispatches URL commands.
///
/// `show` and `delete` go through the same service the HTTP API uses, so
/// bare codes are qualified with `SHORT_URL_DOMAIN` exactly as in requests.
async fn handle_url_action(action: UrlAction) -> Result<()> {
    let domain = std::env::var("SHORT_URL_DOMAIN").unwrap_or_default();

    let short_url = match &action {
        UrlAction::Code {
            full_url,
            domain: override_domain,
        } => {
            let domain = override_domain.as_deref().unwrap_or(&domain);
            println!(
                "{}",
                generate_short_url(domain, full_url).bright_yellow().bold()
            );
            return Ok(());
        }
        UrlAction::Show { short_url } | UrlAction::Delete { short_url, .. } => short_url.clone(),
    };

    let pool = connect().await?;
    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));
    let probe: Arc<dyn UrlProbe> = Arc::new(HttpProbe::new()?);
    let service = UrlService::new(repository, probe, domain);

    let mapping = service
        .resolve(&short_url)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  ID:        {}", mapping.id.to_string().bright_black());
    println!("  Short URL: {}", mapping.short_url.cyan());
    println!("  Full URL:  {}", mapping.full_url.bright_white());
    println!(
        "  Created:   {}",
        mapping
            .date_created
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    if let UrlAction::Delete { yes, .. } = action {
        if !yes {
            let confirmed = Confirm::new()
                .with_prompt("Delete this URL?")
                .default(false)
                .interact()?;

            if !confirmed {
                println!("{}", "Cancelled".red());
                pool.close().await;
                return Ok(());
            }
        }

        service
            .delete(&mapping.short_url)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to delete URL: {}", e))?;

        println!("{}", "URL deleted".green().bold());
    }

    pool.close().await;
    Ok(())
}

/// Displays the number of stored URLs and the newest entry.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let urls_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    let newest: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT MAX(date_created) FROM urls")
            .fetch_one(pool)
            .await?;

    println!(
        "  URLs:   {}",
        urls_count.to_string().bright_green().bold()
    );
    if let Some(newest) = newest {
        println!(
            "  Newest: {}",
            newest.format("%Y-%m-%d %H:%M").to_string().bright_white()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());
            sqlx::query("SELECT 1").fetch_one(pool).await?;
            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Init => {
            ensure_schema(pool).await?;
            println!("{}", "Table `urls` is ready".green().bold());
        }
    }

    Ok(())
}
