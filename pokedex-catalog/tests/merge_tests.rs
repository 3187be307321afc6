use pokedex_catalog::{annotate, CollectedPokemon};
use pokedex_types::Pokemon;
use pretty_assertions::assert_eq;

fn reference() -> Vec<Pokemon> {
    vec![
        Pokemon::new(1u32, "bulbasaur"),
        Pokemon::new(2u32, "ivysaur"),
        Pokemon::new(25u32, "pikachu"),
    ]
}

#[test]
fn empty_collection_marks_nothing() {
    let annotated = annotate(&reference(), &[]);
    assert_eq!(annotated.len(), 3);
    assert!(annotated.iter().all(|entry| !entry.collected));
}

#[test]
fn collected_entities_are_marked_by_key() {
    let collection = vec![Pokemon::new(25u32, "pikachu")];
    let annotated = annotate(&reference(), &collection);

    assert_eq!(
        annotated,
        vec![
            CollectedPokemon {
                pokemon: Pokemon::new(1u32, "bulbasaur"),
                collected: false,
            },
            CollectedPokemon {
                pokemon: Pokemon::new(2u32, "ivysaur"),
                collected: false,
            },
            CollectedPokemon {
                pokemon: Pokemon::new(25u32, "pikachu"),
                collected: true,
            },
        ]
    );
}

#[test]
fn join_is_by_key_not_name() {
    // A collection entry whose name drifted still joins on the key.
    let collection = vec![Pokemon::new(25u32, "PIKACHU")];
    let annotated = annotate(&reference(), &collection);
    assert!(annotated[2].collected);
}

#[test]
fn collection_entries_outside_the_reference_are_ignored() {
    let collection = vec![Pokemon::new(9999u32, "missingno")];
    let annotated = annotate(&reference(), &collection);

    assert_eq!(annotated.len(), 3);
    assert!(annotated.iter().all(|entry| !entry.collected));
}

#[test]
fn reference_order_is_preserved() {
    let collection = vec![Pokemon::new(2u32, "ivysaur"), Pokemon::new(1u32, "bulbasaur")];
    let annotated = annotate(&reference(), &collection);

    let names: Vec<&str> = annotated.iter().map(|e| e.pokemon.name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "ivysaur", "pikachu"]);
}
