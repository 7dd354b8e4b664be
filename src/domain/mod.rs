//! Domain layer: entities and the contracts the application layer depends on.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`probe`] - Reachability check trait
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; concrete implementations live in [`crate::infrastructure`].

pub mod entities;
pub mod probe;
pub mod repositories;
