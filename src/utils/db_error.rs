//! Classification of database errors raised by the `urls` table.

/// Unique constraint on `urls.full_url`.
pub const FULL_URL_CONSTRAINT: &str = "urls_full_url_key";

/// Unique constraint on `urls.short_url`.
pub const SHORT_URL_CONSTRAINT: &str = "urls_short_url_key";

/// Returns true if `e` is a unique violation of any constraint.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// Returns true if `e` is a unique violation on the short URL column,
/// i.e. two different full URLs hashed to the same short code.
pub fn is_short_url_collision(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_URL_CONSTRAINT))
}
