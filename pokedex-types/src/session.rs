//! Authentication session state.
//!
//! `SessionState` is the single source of truth for "who is logged in".
//! Only the auth service mutates it; every other component observes it.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// An authenticated user.
///
/// Exists only while a session is established; created on successful
/// sign-in/sign-up and destroyed on sign-out or session expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable unique identifier from the identity provider.
    pub id: UserId,
    /// The email the user signed in with.
    pub email: String,
}

impl User {
    /// Creates a user record.
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// The authentication state machine.
///
/// `Pending` is transient while an auth call is in flight; a failed call
/// restores the state that was current before the call started.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No user is signed in.
    #[default]
    Unauthenticated,
    /// An auth operation is in flight.
    Pending,
    /// A user is signed in.
    Authenticated(User),
}

impl SessionState {
    /// Returns the signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unauthenticated | Self::Pending => None,
        }
    }

    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Whether an auth operation is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}
