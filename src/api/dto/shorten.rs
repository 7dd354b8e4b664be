//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The full URL to shorten (must parse as an absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub full_url: String,
}

/// Response carrying the created short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
