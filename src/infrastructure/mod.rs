//! Infrastructure layer for external integrations.
//!
//! Implements the contracts defined by the domain layer.
//!
//! - [`persistence`] - PostgreSQL repository and schema setup
//! - [`http`] - Outbound reachability probe

pub mod http;
pub mod persistence;
