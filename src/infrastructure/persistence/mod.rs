//! PostgreSQL persistence.
//!
//! - [`PgUrlRepository`] - URL mapping storage and retrieval
//! - [`schema`] - Table creation at startup

pub mod pg_url_repository;
pub mod schema;

pub use pg_url_repository::PgUrlRepository;
pub use schema::ensure_schema;
