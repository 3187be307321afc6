//! Collection addressing.
//!
//! Maps the authentication state to the address of the user's collection.
//! Resolution is pure and deterministic: equal sessions resolve to equal
//! paths, so callers can compare paths to suppress spurious resubscription.

use pokedex_types::{SessionState, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The resolved address of one user's collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionPath {
    user_id: UserId,
}

impl CollectionPath {
    /// The collection path for a given user.
    #[must_use]
    pub const fn for_user(user_id: UserId) -> Self {
        Self { user_id }
    }

    /// The owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "users/{}/pokedex", self.user_id)
    }
}

/// Resolves the collection address for the current session.
///
/// Returns `None` while no user is present (`Unauthenticated` or
/// `Pending`) — an unresolved address is a normal transient state, not
/// an error.
pub fn resolve(session: &SessionState) -> Option<CollectionPath> {
    session.user().map(|user| CollectionPath::for_user(user.id))
}
