use pokedex_catalog::filter_by_name;
use pokedex_types::Pokemon;
use proptest::prelude::*;

fn reference() -> Vec<Pokemon> {
    vec![
        Pokemon::new(1u32, "bulbasaur"),
        Pokemon::new(2u32, "ivysaur"),
        Pokemon::new(25u32, "pikachu"),
    ]
}

// ── Behavior ────────────────────────────────────────────────────

#[test]
fn empty_query_returns_everything_in_order() {
    let reference = reference();
    let filtered = filter_by_name(&reference, "");

    assert_eq!(filtered.len(), reference.len());
    for (kept, source) in filtered.iter().zip(reference.iter()) {
        assert_eq!(**kept, *source);
    }
}

#[test]
fn substring_selects_matching_entities() {
    let reference = reference();
    let filtered = filter_by_name(&reference, "pika");
    assert_eq!(filtered, vec![&Pokemon::new(25u32, "pikachu")]);
}

#[test]
fn shared_substring_keeps_relative_order() {
    let reference = reference();
    // "saur" appears in bulbasaur and ivysaur.
    let filtered = filter_by_name(&reference, "saur");
    assert_eq!(
        filtered,
        vec![&Pokemon::new(1u32, "bulbasaur"), &Pokemon::new(2u32, "ivysaur")]
    );
}

#[test]
fn no_match_returns_empty() {
    let reference = reference();
    assert!(filter_by_name(&reference, "mewtwo").is_empty());
}

#[test]
fn matching_is_case_sensitive() {
    let reference = reference();
    assert!(filter_by_name(&reference, "Pika").is_empty());
}

#[test]
fn input_is_not_mutated() {
    let reference = reference();
    let before = reference.clone();
    let _ = filter_by_name(&reference, "pika");
    assert_eq!(reference, before);
}

// ── Properties ──────────────────────────────────────────────────

fn arb_reference() -> impl Strategy<Value = Vec<Pokemon>> {
    proptest::collection::vec(("[a-z]{1,12}", 1u32..1000), 0..40)
        .prop_map(|entries| {
            entries
                .into_iter()
                .map(|(name, id)| Pokemon::new(id, name))
                .collect()
        })
}

proptest! {
    #[test]
    fn filter_is_idempotent(reference in arb_reference(), query in "[a-z]{0,6}") {
        let once: Vec<Pokemon> =
            filter_by_name(&reference, &query).into_iter().cloned().collect();
        let twice: Vec<Pokemon> =
            filter_by_name(&once, &query).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filter_preserves_relative_order(reference in arb_reference(), query in "[a-z]{0,6}") {
        let filtered = filter_by_name(&reference, &query);
        let mut last_index = 0;
        for kept in filtered {
            let index = reference
                .iter()
                .position(|p| std::ptr::eq(p, kept))
                .unwrap();
            prop_assert!(index >= last_index);
            last_index = index;
        }
    }

    #[test]
    fn every_result_contains_the_query(reference in arb_reference(), query in "[a-z]{1,6}") {
        for kept in filter_by_name(&reference, &query) {
            prop_assert!(kept.name.contains(&query));
        }
    }
}
