//! View-model layer for the pokedex core.
//!
//! This is the UI boundary: per page, a tri-state result plus imperative
//! handles (`set_query`, `clear_query`; auth operations live on the
//! session itself). No rendering concern crosses it — the presentation
//! layer matches on [`PageState`] and calls the handles.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pokedex_auth::{provider::mock::MockIdentityProvider, AuthSession};
//! use pokedex_collection::store::mock::MemoryCollectionStore;
//! use pokedex_types::Pokemon;
//! use pokedex_view::{PageState, PokedexPage};
//!
//! # tokio_test::block_on(async {
//! let provider = Arc::new(MockIdentityProvider::new());
//! provider.register_user("ash@pallet.town", "pikachu123");
//! let session = AuthSession::new(provider);
//! let store = Arc::new(MemoryCollectionStore::new());
//!
//! let page = PokedexPage::new(
//!     &session,
//!     store,
//!     vec![Pokemon::new(25u32, "pikachu")],
//! );
//! assert_eq!(page.state(), PageState::Loading); // nobody signed in yet
//!
//! session.sign_in("ash@pallet.town", "pikachu123").await.unwrap();
//! assert!(matches!(page.state(), PageState::Ready(_)));
//! # });
//! ```

mod page;

pub use page::{PageState, PokedexPage, MAX_QUERY_LEN};
