//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and provide a small API for HTTP
//! handlers.
//!
//! - [`services::url_service::UrlService`] - Shorten, resolve and delete URLs

pub mod services;
