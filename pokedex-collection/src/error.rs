//! Error types for the collection layer.

use thiserror::Error;

/// Result type for collection-store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors reported by the remote collection store.
///
/// A store error is terminal for the current subscription: it is surfaced
/// as the subscription's `Error` state and never retried automatically —
/// retry policy belongs to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The rules at the remote store rejected the read.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Transport failure between client and store.
    #[error("transport error: {0}")]
    Transport(String),

    /// The subscribed path no longer exists.
    #[error("path closed: {0}")]
    PathClosed(String),
}
