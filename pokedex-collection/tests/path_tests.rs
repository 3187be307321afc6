use pokedex_collection::{resolve, CollectionPath};
use pokedex_types::{SessionState, User, UserId};

#[test]
fn unauthenticated_resolves_to_none() {
    assert_eq!(resolve(&SessionState::Unauthenticated), None);
}

#[test]
fn pending_resolves_to_none() {
    assert_eq!(resolve(&SessionState::Pending), None);
}

#[test]
fn authenticated_resolves_to_user_scoped_path() {
    let user = User::new(UserId::new(), "ash@pallet.town");
    let session = SessionState::Authenticated(user.clone());

    let path = resolve(&session).unwrap();
    assert_eq!(path.user_id(), user.id);
    assert_eq!(path.to_string(), format!("users/{}/pokedex", user.id));
}

#[test]
fn resolution_is_deterministic() {
    let session = SessionState::Authenticated(User::new(UserId::new(), "ash@pallet.town"));
    assert_eq!(resolve(&session), resolve(&session));
}

#[test]
fn distinct_users_resolve_to_distinct_paths() {
    let a = resolve(&SessionState::Authenticated(User::new(UserId::new(), "a@x")));
    let b = resolve(&SessionState::Authenticated(User::new(UserId::new(), "b@x")));
    assert_ne!(a, b);
}

#[test]
fn path_equality_follows_user_id() {
    let id = UserId::new();
    assert_eq!(CollectionPath::for_user(id), CollectionPath::for_user(id));
}
