//! Core domain entities.
//!
//! - [`UrlMapping`] - A stored full URL / short URL pair
//! - [`NewUrlMapping`] - Payload for inserting a mapping

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
