//! The pokedex page view model.
//!
//! Owns everything one catalog page needs: the immutable reference
//! dataset, a live subscription to the signed-in user's collection, and
//! the search query. The page reacts to session changes by re-resolving
//! the collection path; rendering concerns stay on the other side of
//! [`PageState`].

use pokedex_auth::{AuthSession, SessionObserver};
use pokedex_catalog::{annotate, filter_by_name, CollectedPokemon};
use pokedex_collection::{
    resolve, CollectionStore, CollectionSubscriber, QueryOptions, SubscriptionState,
};
use pokedex_types::Pokemon;
use std::sync::{Arc, Mutex, Weak};
use tracing::debug;

/// Cosmetic bound on the search input, matching the search field's
/// max length.
pub const MAX_QUERY_LEN: usize = 50;

/// What the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// Collection not loaded yet (or nobody signed in).
    Loading,
    /// Filtered reference entities, annotated with collection membership.
    Ready(Vec<CollectedPokemon>),
    /// The query matched nothing; render "no pokemon named {query}".
    Empty {
        /// The non-empty query that matched nothing.
        query: String,
    },
    /// The collection cannot be loaded; persistent until re-resolved.
    Error {
        /// Human-readable message for the error panel.
        message: String,
    },
}

struct PageCore {
    reference: Vec<Pokemon>,
    subscriber: CollectionSubscriber,
    query: Mutex<String>,
}

/// One catalog page bound to a session.
pub struct PokedexPage {
    core: Arc<PageCore>,
    _session_observer: SessionObserver,
}

impl PokedexPage {
    /// Creates the page and binds it to the session: the collection path
    /// is resolved now and re-resolved on every session change.
    pub fn new(
        session: &Arc<AuthSession>,
        store: Arc<dyn CollectionStore>,
        reference: Vec<Pokemon>,
    ) -> Self {
        let core = Arc::new(PageCore {
            reference,
            subscriber: CollectionSubscriber::new(store, QueryOptions::default()),
            query: Mutex::new(String::new()),
        });
        core.subscriber.set_path(resolve(&session.state()));

        let weak: Weak<PageCore> = Arc::downgrade(&core);
        let session_observer = session.subscribe(move |state| {
            if let Some(core) = weak.upgrade() {
                core.subscriber.set_path(resolve(state));
            }
        });

        Self {
            core,
            _session_observer: session_observer,
        }
    }

    /// Sets the search query, truncated to [`MAX_QUERY_LEN`] characters.
    pub fn set_query(&self, query: &str) {
        let bounded: String = query.chars().take(MAX_QUERY_LEN).collect();
        debug!(query = %bounded, "search query changed");
        *self.core.query.lock().unwrap() = bounded;
    }

    /// Clears the search query.
    pub fn clear_query(&self) {
        self.core.query.lock().unwrap().clear();
    }

    /// The current search query.
    pub fn query(&self) -> String {
        self.core.query.lock().unwrap().clone()
    }

    /// Computes what the page shows right now.
    ///
    /// Recomputed on demand from the latest snapshot and query; the
    /// reference dataset is never mutated.
    pub fn state(&self) -> PageState {
        match self.core.subscriber.state() {
            SubscriptionState::Loading => PageState::Loading,
            SubscriptionState::Error(err) => PageState::Error {
                message: format!("Cannot load your collection: {err}."),
            },
            SubscriptionState::Ready(collection) => {
                let query = self.query();
                let filtered: Vec<Pokemon> = filter_by_name(&self.core.reference, &query)
                    .into_iter()
                    .cloned()
                    .collect();

                if filtered.is_empty() && !query.is_empty() {
                    PageState::Empty { query }
                } else {
                    PageState::Ready(annotate(&filtered, &collection))
                }
            }
        }
    }
}
