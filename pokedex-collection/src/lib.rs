//! Live collection synchronization for the pokedex core.
//!
//! # Architecture
//!
//! - **Path**: [`resolve`] maps the session state to the address of the
//!   user's collection, or to `None` while no user is present
//! - **Store**: the [`CollectionStore`] trait is the seam to the remote
//!   ordered collection; an in-memory mock lives in [`store::mock`]
//! - **Subscriber**: [`CollectionSubscriber`] keeps at most one open
//!   subscription matching the resolved path and republishes snapshots
//!   as a tri-state [`SubscriptionState`]
//!
//! # Lifecycle
//!
//! 1. A session change re-resolves the path
//! 2. `set_path` supersedes the previous subscription (generation bump),
//!    closes it, and opens the new one
//! 3. Snapshots arrive in store order; stale-generation callbacks are
//!    discarded
//! 4. Dropping the subscriber closes the subscription unconditionally
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pokedex_collection::store::mock::MemoryCollectionStore;
//! use pokedex_collection::{resolve, CollectionSubscriber, QueryOptions};
//! use pokedex_types::{Pokemon, SessionState, User, UserId};
//!
//! let store = Arc::new(MemoryCollectionStore::new());
//! let session = SessionState::Authenticated(User::new(UserId::new(), "ash@pallet.town"));
//!
//! let subscriber = CollectionSubscriber::new(store, QueryOptions::default());
//! subscriber.set_path(resolve(&session));
//! assert!(subscriber.state().is_ready());
//! ```

mod error;
mod path;
mod query;
mod state;
pub mod store;
mod subscriber;

pub use error::{StoreError, StoreResult};
pub use path::{resolve, CollectionPath};
pub use query::{OrderField, QueryOptions, SortDirection};
pub use state::SubscriptionState;
pub use store::{CollectionStore, SnapshotEvent, SnapshotListener, SubscriptionHandle};
pub use subscriber::CollectionSubscriber;
