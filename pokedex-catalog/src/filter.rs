//! Search filter over the reference dataset.

use pokedex_types::Pokemon;

/// Selects entities whose name contains `query` as a substring.
///
/// Matching is case- and accent-sensitive, exactly as stored. Relative
/// order is preserved and the input is never mutated; an empty query
/// selects everything.
pub fn filter_by_name<'a>(reference: &'a [Pokemon], query: &str) -> Vec<&'a Pokemon> {
    reference
        .iter()
        .filter(|pokemon| pokemon.name.contains(query))
        .collect()
}
