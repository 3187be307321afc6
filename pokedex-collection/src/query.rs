//! Query options for ordered collection reads.

use pokedex_types::Pokemon;
use serde::{Deserialize, Serialize};

/// Field the remote store orders the collection by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderField {
    /// The stable upstream key. The store's native ordering.
    #[default]
    ApiId,
    /// Lexicographic by display name.
    Name,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Ordering contract for a subscription.
///
/// Must match the remote collection's native ordering semantics so that
/// successive snapshots are comparable without client-side re-sorting.
/// The default — `api_id` ascending — is what the pokedex store uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Field to order by.
    pub order_by: OrderField,
    /// Direction to order in.
    pub direction: SortDirection,
}

impl QueryOptions {
    /// Sorts entries into this query's order.
    pub fn sort(&self, entries: &mut [Pokemon]) {
        match self.order_by {
            OrderField::ApiId => entries.sort_by_key(|p| p.api_id),
            OrderField::Name => entries.sort_by(|a, b| a.name.cmp(&b.name)),
        }
        if self.direction == SortDirection::Descending {
            entries.reverse();
        }
    }
}
