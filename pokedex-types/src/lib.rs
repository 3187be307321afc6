//! Core type definitions for the pokedex collection core.
//!
//! This crate defines the fundamental types shared by the auth, collection
//! and catalog layers:
//! - User and catalog-entity identifiers
//! - The immutable `Pokemon` catalog entity
//! - The authentication `SessionState` machine
//!
//! Presentation-specific types (page props, notification payloads, etc.)
//! belong in the view layer, not here.

mod ids;
mod pokemon;
mod session;

pub use ids::{ApiId, UserId};
pub use pokemon::Pokemon;
pub use session::{SessionState, User};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid api id: {0}")]
    InvalidApiId(#[from] std::num::ParseIntError),
}
