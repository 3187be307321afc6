//! Authentication layer for the pokedex core.
//!
//! # Architecture
//!
//! - **Provider**: the [`IdentityProvider`] trait abstracts the external
//!   identity backend; an in-memory mock lives in [`provider::mock`]
//! - **Session**: [`AuthSession`] owns the
//!   `Unauthenticated | Pending | Authenticated` state machine and an
//!   observer list notified synchronously on every change
//! - **Guard**: [`RedirectGuard`] gates route access on session presence
//!
//! The session is the only process-wide mutable state in the system.
//! Consumers receive it as an `Arc<AuthSession>` and observe it via
//! [`AuthSession::subscribe`] rather than polling.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pokedex_auth::{AuthSession, provider::mock::MockIdentityProvider};
//!
//! # tokio_test::block_on(async {
//! let provider = Arc::new(MockIdentityProvider::new());
//! provider.register_user("ash@pallet.town", "pikachu123");
//!
//! let session = AuthSession::new(provider);
//! let user = session.sign_in("ash@pallet.town", "pikachu123").await.unwrap();
//! assert_eq!(user.email, "ash@pallet.town");
//! # });
//! ```

mod error;
mod guard;
pub mod provider;
mod session;

pub use error::{AuthError, AuthResult};
pub use guard::{AccessPolicy, GuardConfig, GuardDecision, RedirectGuard};
pub use provider::{AuthStateListener, IdentityProvider, ProviderWatch};
pub use session::{AuthSession, SessionListener, SessionObserver};
