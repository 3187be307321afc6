//! Live collection subscriber.
//!
//! Maintains at most one open subscription matching the currently
//! resolved collection path, and republishes the store's snapshots as a
//! [`SubscriptionState`] through a watch channel.
//!
//! Every subscription is tagged with a generation. Changing or clearing
//! the path bumps the generation before the old subscription is closed,
//! so a callback that was already in flight for the superseded
//! subscription is discarded instead of mutating state meant for the new
//! address.

use crate::path::CollectionPath;
use crate::query::QueryOptions;
use crate::state::SubscriptionState;
use crate::store::{CollectionStore, SnapshotEvent, SnapshotListener, SubscriptionHandle};
use std::sync::{Arc, Mutex, Weak};
use tokio::sync::watch;
use tracing::{debug, warn};

/// State shared with listener closures.
///
/// The generation lock also serializes publishing, so a stale-generation
/// check and the publish it guards are atomic with respect to
/// [`supersede`](Self::supersede).
struct SubscriberCore {
    generation: Mutex<u64>,
    state: watch::Sender<SubscriptionState>,
}

impl SubscriberCore {
    /// Invalidates all outstanding callbacks and resets to `Loading`.
    /// Returns the new current generation.
    fn supersede(&self) -> u64 {
        let mut generation = self.generation.lock().unwrap();
        *generation += 1;
        self.state.send_replace(SubscriptionState::Loading);
        *generation
    }

    /// Applies one store event, unless its generation was superseded.
    fn apply(&self, generation: u64, event: SnapshotEvent) {
        let current = self.generation.lock().unwrap();
        if *current != generation {
            debug!(stale = generation, current = *current, "dropping stale snapshot callback");
            return;
        }
        let next = match event {
            SnapshotEvent::Snapshot(entries) => {
                debug!(len = entries.len(), "snapshot applied");
                SubscriptionState::Ready(entries)
            }
            SnapshotEvent::Error(err) => {
                warn!(error = %err, "collection subscription failed");
                SubscriptionState::Error(err)
            }
        };
        self.state.send_replace(next);
    }
}

struct ActiveSubscription {
    path: Option<CollectionPath>,
    handle: Option<SubscriptionHandle>,
}

/// Keeps one live subscription in step with the resolved path.
pub struct CollectionSubscriber {
    store: Arc<dyn CollectionStore>,
    query: QueryOptions,
    core: Arc<SubscriberCore>,
    active: Mutex<ActiveSubscription>,
}

impl CollectionSubscriber {
    /// Creates a subscriber with no resolved path; state starts as
    /// `Loading`.
    pub fn new(store: Arc<dyn CollectionStore>, query: QueryOptions) -> Self {
        let (state, _) = watch::channel(SubscriptionState::Loading);
        Self {
            store,
            query,
            core: Arc::new(SubscriberCore {
                generation: Mutex::new(0),
                state,
            }),
            active: Mutex::new(ActiveSubscription {
                path: None,
                handle: None,
            }),
        }
    }

    /// Points the subscriber at a new resolved path (or at none).
    ///
    /// Setting the path it already has is a no-op — equal sessions
    /// resolve to equal paths, so this is what suppresses spurious
    /// resubscription. Otherwise the old subscription is superseded and
    /// closed before the new one opens; the two are never active
    /// simultaneously.
    pub fn set_path(&self, path: Option<CollectionPath>) {
        let mut active = self.active.lock().unwrap();
        if active.path == path {
            return;
        }

        let generation = self.core.supersede();
        if let Some(old) = active.handle.take() {
            old.unsubscribe();
        }
        active.path = path.clone();

        match path {
            Some(path) => {
                debug!(%path, generation, "opening collection subscription");
                let listener = self.listener_for(generation);
                let handle = self.store.subscribe(&path, self.query, listener);
                active.handle = Some(handle);
            }
            None => {
                debug!("path unresolved, subscription closed");
            }
        }
    }

    /// The currently resolved path.
    pub fn path(&self) -> Option<CollectionPath> {
        self.active.lock().unwrap().path.clone()
    }

    /// Snapshot of the current subscription state.
    pub fn state(&self) -> SubscriptionState {
        self.core.state.borrow().clone()
    }

    /// A receiver that observes every state change.
    pub fn watch(&self) -> watch::Receiver<SubscriptionState> {
        self.core.state.subscribe()
    }

    /// The ordering contract this subscriber opens subscriptions with.
    pub fn query(&self) -> QueryOptions {
        self.query
    }

    fn listener_for(&self, generation: u64) -> SnapshotListener {
        let core: Weak<SubscriberCore> = Arc::downgrade(&self.core);
        Box::new(move |event| {
            // A dropped subscriber leaves nothing to mutate.
            if let Some(core) = core.upgrade() {
                core.apply(generation, event);
            }
        })
    }
}

impl Drop for CollectionSubscriber {
    fn drop(&mut self) {
        // Invalidate in-flight callbacks before the handle closes, so a
        // snapshot racing the teardown is dropped by the generation check.
        self.core.supersede();
        if let Some(handle) = self.active.lock().unwrap().handle.take() {
            handle.unsubscribe();
        }
    }
}
