//! Subscription result state.

use crate::error::StoreError;
use pokedex_types::Pokemon;

/// Tri-state result of a live collection subscription.
///
/// `Loading` covers both "subscription opening" and "no resolved address
/// yet" (not signed in) — the latter is documented behavior, distinct
/// from an error. Transitions happen only on listener callback or
/// teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionState {
    /// Waiting for the first snapshot, or no address resolved.
    Loading,
    /// The most recent snapshot, in store order.
    Ready(Vec<Pokemon>),
    /// The subscription failed; terminal for the current address.
    Error(StoreError),
}

impl SubscriptionState {
    /// Whether the subscription is still waiting for data.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether a snapshot has been delivered.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The current snapshot, if one has been delivered.
    pub fn data(&self) -> Option<&[Pokemon]> {
        match self {
            Self::Ready(entries) => Some(entries),
            Self::Loading | Self::Error(_) => None,
        }
    }

    /// The failure cause, if the subscription errored.
    pub fn error(&self) -> Option<&StoreError> {
        match self {
            Self::Error(err) => Some(err),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}
