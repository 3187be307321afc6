//! The catalog entity.

use crate::ApiId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entity of the fixed reference dataset.
///
/// Immutable once loaded; owned by the reference-dataset loader and shared
/// read-only downstream. The same shape is stored as an entry in a user's
/// live collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Stable upstream key, ascending and unique across the dataset.
    pub api_id: ApiId,
    /// Display name, stored exactly as the upstream API returns it.
    pub name: String,
}

impl Pokemon {
    /// Creates a catalog entity.
    pub fn new(api_id: impl Into<ApiId>, name: impl Into<String>) -> Self {
        Self {
            api_id: api_id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.api_id, self.name)
    }
}
