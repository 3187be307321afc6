//! Error types for the catalog layer.

use pokedex_types::ApiId;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while fetching the reference dataset.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport or decode failure from the HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream API answered with an unexpected status.
    #[error("unexpected status {status} fetching entity {id}")]
    Status { id: ApiId, status: u16 },

    /// The requested entity does not exist upstream.
    #[error("entity {0} not found")]
    MissingEntity(ApiId),
}
