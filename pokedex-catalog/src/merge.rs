//! Join between the reference dataset and the live collection.
//!
//! Entities present in the user's live collection are cross-referenced
//! against the reference dataset by their stable key, so the display
//! layer can mark which catalog entries have been collected.

use pokedex_types::{ApiId, Pokemon};
use std::collections::HashSet;

/// A reference entity annotated with collection membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedPokemon {
    /// The reference entity.
    pub pokemon: Pokemon,
    /// Whether the user's collection contains it.
    pub collected: bool,
}

/// Annotates each reference entity with membership in `collection`.
///
/// The key set is built once per snapshot; the join is O(n), not a
/// rescan of the collection per entity. Reference order is preserved.
pub fn annotate(reference: &[Pokemon], collection: &[Pokemon]) -> Vec<CollectedPokemon> {
    let collected: HashSet<ApiId> = collection.iter().map(|entry| entry.api_id).collect();

    reference
        .iter()
        .map(|pokemon| CollectedPokemon {
            pokemon: pokemon.clone(),
            collected: collected.contains(&pokemon.api_id),
        })
        .collect()
}
