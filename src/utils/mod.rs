//! Helper functions shared across layers.
//!
//! - [`short_code`] - Deterministic short code generation
//! - [`db_error`] - Classification of database constraint violations

pub mod db_error;
pub mod short_code;
