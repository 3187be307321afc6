//! Remote collection store abstraction.
//!
//! Defines the subscription seam to the live ordered collection store,
//! allowing the subscriber to work with any backend. A subscription
//! delivers zero or more snapshots through a listener until its handle
//! is dropped.

use crate::error::StoreError;
use crate::path::CollectionPath;
use crate::query::QueryOptions;
use pokedex_types::Pokemon;

/// One delivery from a live subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotEvent {
    /// A full ordered snapshot of the collection at a point in time.
    Snapshot(Vec<Pokemon>),
    /// Terminal failure for this subscription.
    Error(StoreError),
}

/// Callback receiving snapshot events for one subscription.
pub type SnapshotListener = Box<dyn Fn(SnapshotEvent) + Send + Sync>;

/// Handle to an open subscription.
///
/// Unsubscribing is a synchronous request to stop receiving further
/// callbacks; the handle also unsubscribes when dropped, so teardown is
/// guaranteed on every exit path.
pub struct SubscriptionHandle(Option<Box<dyn FnOnce() + Send>>);

impl SubscriptionHandle {
    /// Wraps a store-specific close action.
    pub fn new(close: impl FnOnce() + Send + 'static) -> Self {
        Self(Some(Box::new(close)))
    }

    /// A handle with nothing to close (e.g. a subscription that failed
    /// at open).
    #[must_use]
    pub fn noop() -> Self {
        Self(None)
    }

    /// Closes the subscription.
    pub fn unsubscribe(mut self) {
        if let Some(close) = self.0.take() {
            close();
        }
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        if let Some(close) = self.0.take() {
            close();
        }
    }
}

/// A live, ordered, remotely stored collection.
///
/// `subscribe` returns immediately; snapshots (and errors) arrive through
/// the listener, in the order the store produces them, for as long as the
/// handle is alive.
pub trait CollectionStore: Send + Sync {
    /// Opens a subscription to the collection at `path`, ordered per
    /// `query`.
    fn subscribe(
        &self,
        path: &CollectionPath,
        query: QueryOptions,
        listener: SnapshotListener,
    ) -> SubscriptionHandle;
}

/// An in-memory collection store for testing.
pub mod mock {
    use super::*;
    use pokedex_types::ApiId;
    use std::collections::{BTreeMap, HashMap};
    use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    struct Registration {
        path: CollectionPath,
        query: QueryOptions,
        listener: SnapshotListener,
    }

    #[derive(Default)]
    struct StoreInner {
        collections: HashMap<CollectionPath, BTreeMap<ApiId, Pokemon>>,
        subscriptions: HashMap<u64, Registration>,
        failures: HashMap<CollectionPath, StoreError>,
    }

    /// In-memory store that pushes a fresh ordered snapshot to every
    /// subscriber of a path whenever that path's collection changes.
    ///
    /// Exposes active/total subscription counters so tests can assert the
    /// one-subscription-per-path invariant and the absence of spurious
    /// resubscription.
    pub struct MemoryCollectionStore {
        inner: Arc<Mutex<StoreInner>>,
        next_subscription_id: AtomicU64,
        total_subscribes: AtomicUsize,
        deliver_on_subscribe: AtomicBool,
    }

    impl MemoryCollectionStore {
        /// Creates an empty store that delivers an initial snapshot on
        /// subscribe.
        pub fn new() -> Self {
            Self {
                inner: Arc::default(),
                next_subscription_id: AtomicU64::new(0),
                total_subscribes: AtomicUsize::new(0),
                deliver_on_subscribe: AtomicBool::new(true),
            }
        }

        /// Suppresses the initial snapshot so tests control delivery
        /// timing with [`flush`](Self::flush).
        pub fn defer_initial_snapshot(&self) {
            self.deliver_on_subscribe.store(false, Ordering::SeqCst);
        }

        /// Replaces the collection at `path` and notifies its subscribers.
        pub fn set_collection(&self, path: &CollectionPath, entries: Vec<Pokemon>) {
            let mut inner = self.inner.lock().unwrap();
            let collection = inner.collections.entry(path.clone()).or_default();
            collection.clear();
            for entry in entries {
                collection.insert(entry.api_id, entry);
            }
            Self::notify_path(&inner, path);
        }

        /// Adds one entry to the collection at `path` and notifies its
        /// subscribers.
        pub fn insert(&self, path: &CollectionPath, entry: Pokemon) {
            let mut inner = self.inner.lock().unwrap();
            inner
                .collections
                .entry(path.clone())
                .or_default()
                .insert(entry.api_id, entry);
            Self::notify_path(&inner, path);
        }

        /// Removes one entry from the collection at `path` and notifies
        /// its subscribers.
        pub fn remove(&self, path: &CollectionPath, api_id: ApiId) {
            let mut inner = self.inner.lock().unwrap();
            if let Some(collection) = inner.collections.get_mut(path) {
                collection.remove(&api_id);
            }
            Self::notify_path(&inner, path);
        }

        /// Makes subscriptions to `path` fail at open with `error`.
        pub fn fail_path(&self, path: &CollectionPath, error: StoreError) {
            self.inner.lock().unwrap().failures.insert(path.clone(), error);
        }

        /// Pushes an error to every active subscriber of `path`.
        pub fn emit_error(&self, path: &CollectionPath, error: StoreError) {
            let inner = self.inner.lock().unwrap();
            for registration in inner.subscriptions.values() {
                if registration.path == *path {
                    (registration.listener)(SnapshotEvent::Error(error.clone()));
                }
            }
        }

        /// Pushes the current snapshot of `path` to its subscribers.
        pub fn flush(&self, path: &CollectionPath) {
            let inner = self.inner.lock().unwrap();
            Self::notify_path(&inner, path);
        }

        /// Number of currently open subscriptions.
        pub fn active_subscriptions(&self) -> usize {
            self.inner.lock().unwrap().subscriptions.len()
        }

        /// Number of subscriptions ever opened.
        pub fn total_subscribes(&self) -> usize {
            self.total_subscribes.load(Ordering::SeqCst)
        }

        fn snapshot_for(inner: &StoreInner, path: &CollectionPath, query: QueryOptions) -> Vec<Pokemon> {
            let mut entries: Vec<Pokemon> = inner
                .collections
                .get(path)
                .map(|c| c.values().cloned().collect())
                .unwrap_or_default();
            query.sort(&mut entries);
            entries
        }

        fn notify_path(inner: &StoreInner, path: &CollectionPath) {
            for registration in inner.subscriptions.values() {
                if registration.path == *path {
                    let snapshot = Self::snapshot_for(inner, path, registration.query);
                    (registration.listener)(SnapshotEvent::Snapshot(snapshot));
                }
            }
        }
    }

    impl Default for MemoryCollectionStore {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CollectionStore for MemoryCollectionStore {
        fn subscribe(
            &self,
            path: &CollectionPath,
            query: QueryOptions,
            listener: SnapshotListener,
        ) -> SubscriptionHandle {
            self.total_subscribes.fetch_add(1, Ordering::SeqCst);

            let mut inner = self.inner.lock().unwrap();
            if let Some(error) = inner.failures.get(path) {
                listener(SnapshotEvent::Error(error.clone()));
                return SubscriptionHandle::noop();
            }

            let id = self.next_subscription_id.fetch_add(1, Ordering::SeqCst);
            if self.deliver_on_subscribe.load(Ordering::SeqCst) {
                let snapshot = Self::snapshot_for(&inner, path, query);
                listener(SnapshotEvent::Snapshot(snapshot));
            }
            inner.subscriptions.insert(
                id,
                Registration {
                    path: path.clone(),
                    query,
                    listener,
                },
            );

            let handle_inner = Arc::clone(&self.inner);
            SubscriptionHandle::new(move || {
                handle_inner.lock().unwrap().subscriptions.remove(&id);
            })
        }
    }
}
