//! URL mapping entity: a full URL and the short URL derived from it.

use chrono::{DateTime, Utc};

/// A persisted mapping between a full URL and its short URL.
///
/// Rows are created once and never updated in place; `date_created` is set by
/// the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: i64,
    pub full_url: String,
    pub short_url: String,
    pub date_created: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        full_url: String,
        short_url: String,
        date_created: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            full_url,
            short_url,
            date_created,
        }
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub full_url: String,
    pub short_url: String,
}
