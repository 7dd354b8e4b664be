//! Deterministic short code generation.
//!
//! The short code is the first [`SHORT_CODE_LEN`] characters of the standard
//! base64 encoding (padding stripped) of the SHA-256 digest of the full URL.
//! The same URL therefore always yields the same short URL.

use base64::Engine as _;
use sha2::{Digest, Sha256};

/// Number of encoded characters kept from the digest.
pub const SHORT_CODE_LEN: usize = 8;

/// Computes the bare short code for `full_url`.
///
/// # Examples
///
/// ```
/// use urlhash::utils::short_code::generate_code;
///
/// assert_eq!(generate_code("https://example.com/a"), "Lc4KTFBE");
/// ```
pub fn generate_code(full_url: &str) -> String {
    let digest = Sha256::digest(full_url.as_bytes());
    let mut code = base64::engine::general_purpose::STANDARD_NO_PAD.encode(digest);
    code.truncate(SHORT_CODE_LEN);
    code
}

/// Builds the short URL for `full_url` by prepending `domain` to its code.
///
/// `domain` is used verbatim, so it should carry its own trailing separator
/// (e.g. `http://short.domain/`).
pub fn generate_short_url(domain: &str, full_url: &str) -> String {
    format!("{}{}", domain, generate_code(full_url))
}
