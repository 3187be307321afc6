//! Identity provider abstraction.
//!
//! Defines the trait the session service talks to, so the core works with
//! any auth backend. Provider-specific error codes are mapped into
//! [`AuthError`](crate::AuthError) kinds by the implementation.

use crate::error::AuthResult;
use async_trait::async_trait;
use pokedex_types::User;

/// Callback invoked when the provider's view of the signed-in user changes
/// (session restored, token expired, remote sign-out).
pub type AuthStateListener = Box<dyn Fn(Option<User>) + Send + Sync>;

/// RAII handle for a provider auth-state registration.
///
/// Dropping the handle detaches the listener; late provider callbacks go
/// nowhere.
pub struct ProviderWatch(Option<Box<dyn FnOnce() + Send>>);

impl ProviderWatch {
    /// Wraps a provider-specific detach action.
    pub fn new(detach: impl FnOnce() + Send + 'static) -> Self {
        Self(Some(Box::new(detach)))
    }

    /// A watch with nothing to detach, for providers that never push.
    #[must_use]
    pub fn noop() -> Self {
        Self(None)
    }
}

impl Drop for ProviderWatch {
    fn drop(&mut self) {
        if let Some(detach) = self.0.take() {
            detach();
        }
    }
}

/// An external identity provider.
///
/// All operations are async and return an explicit [`AuthError`] kind on
/// rejection — implementations must not swallow failures.
///
/// [`AuthError`]: crate::AuthError
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticates an existing account.
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<User>;

    /// Creates a new account and signs it in.
    async fn sign_up(&self, email: &str, password: &str) -> AuthResult<User>;

    /// Dispatches a password-reset email. Side effect only.
    async fn send_password_reset(&self, email: &str) -> AuthResult<()>;

    /// Ends the provider-side session.
    async fn sign_out(&self) -> AuthResult<()>;

    /// Registers for provider-initiated auth-state changes.
    fn on_auth_state_changed(&self, listener: AuthStateListener) -> ProviderWatch;
}

/// An in-memory identity provider for testing.
pub mod mock {
    use super::*;
    use crate::error::AuthError;
    use pokedex_types::UserId;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Minimum password length accepted by [`MockIdentityProvider::sign_up`].
    pub const MIN_PASSWORD_LEN: usize = 6;

    #[derive(Default)]
    struct Accounts {
        by_email: HashMap<String, (String, UserId)>,
        current: Option<User>,
    }

    /// Scripted in-memory provider.
    ///
    /// Tracks per-operation call counts so tests can assert that
    /// validation failures issue zero provider calls, and exposes
    /// [`emit`](Self::emit) to simulate provider-initiated changes such
    /// as session expiry.
    #[derive(Default)]
    pub struct MockIdentityProvider {
        accounts: Mutex<Accounts>,
        listeners: Arc<Mutex<HashMap<u64, AuthStateListener>>>,
        next_listener_id: AtomicU64,
        fail_next: Mutex<Option<AuthError>>,
        sign_in_calls: AtomicUsize,
        sign_up_calls: AtomicUsize,
        reset_calls: AtomicUsize,
        sign_out_calls: AtomicUsize,
    }

    impl MockIdentityProvider {
        /// Creates an empty provider.
        pub fn new() -> Self {
            Self::default()
        }

        /// Seeds an account and returns its id.
        pub fn register_user(&self, email: &str, password: &str) -> UserId {
            let id = UserId::new();
            self.accounts
                .lock()
                .unwrap()
                .by_email
                .insert(email.to_string(), (password.to_string(), id));
            id
        }

        /// Makes the next operation fail with the given error.
        pub fn fail_next(&self, error: AuthError) {
            *self.fail_next.lock().unwrap() = Some(error);
        }

        /// Pushes a provider-initiated auth-state change to all listeners.
        pub fn emit(&self, user: Option<User>) {
            self.accounts.lock().unwrap().current = user.clone();
            let listeners = self.listeners.lock().unwrap();
            for listener in listeners.values() {
                listener(user.clone());
            }
        }

        /// Number of `sign_in` calls received.
        pub fn sign_in_calls(&self) -> usize {
            self.sign_in_calls.load(Ordering::SeqCst)
        }

        /// Number of `sign_up` calls received.
        pub fn sign_up_calls(&self) -> usize {
            self.sign_up_calls.load(Ordering::SeqCst)
        }

        /// Number of `send_password_reset` calls received.
        pub fn reset_calls(&self) -> usize {
            self.reset_calls.load(Ordering::SeqCst)
        }

        /// Number of `sign_out` calls received.
        pub fn sign_out_calls(&self) -> usize {
            self.sign_out_calls.load(Ordering::SeqCst)
        }

        /// Number of attached auth-state listeners.
        pub fn listener_count(&self) -> usize {
            self.listeners.lock().unwrap().len()
        }

        fn take_scripted_failure(&self) -> Option<AuthError> {
            self.fail_next.lock().unwrap().take()
        }
    }

    #[async_trait]
    impl IdentityProvider for MockIdentityProvider {
        async fn sign_in(&self, email: &str, password: &str) -> AuthResult<User> {
            self.sign_in_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = self.take_scripted_failure() {
                return Err(err);
            }

            let mut accounts = self.accounts.lock().unwrap();
            match accounts.by_email.get(email) {
                Some((stored, id)) if stored == password => {
                    let user = User::new(*id, email);
                    accounts.current = Some(user.clone());
                    Ok(user)
                }
                _ => Err(AuthError::InvalidCredential),
            }
        }

        async fn sign_up(&self, email: &str, password: &str) -> AuthResult<User> {
            self.sign_up_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = self.take_scripted_failure() {
                return Err(err);
            }
            if password.len() < MIN_PASSWORD_LEN {
                return Err(AuthError::WeakPassword);
            }

            let mut accounts = self.accounts.lock().unwrap();
            if accounts.by_email.contains_key(email) {
                return Err(AuthError::EmailInUse);
            }
            let id = UserId::new();
            accounts
                .by_email
                .insert(email.to_string(), (password.to_string(), id));
            let user = User::new(id, email);
            accounts.current = Some(user.clone());
            Ok(user)
        }

        async fn send_password_reset(&self, email: &str) -> AuthResult<()> {
            self.reset_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = self.take_scripted_failure() {
                return Err(err);
            }

            let accounts = self.accounts.lock().unwrap();
            if accounts.by_email.contains_key(email) {
                Ok(())
            } else {
                Err(AuthError::UserNotFound)
            }
        }

        async fn sign_out(&self) -> AuthResult<()> {
            self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = self.take_scripted_failure() {
                return Err(err);
            }
            self.accounts.lock().unwrap().current = None;
            Ok(())
        }

        fn on_auth_state_changed(&self, listener: AuthStateListener) -> ProviderWatch {
            let id = self.next_listener_id.fetch_add(1, Ordering::SeqCst);
            self.listeners.lock().unwrap().insert(id, listener);

            let listeners = Arc::clone(&self.listeners);
            ProviderWatch::new(move || {
                listeners.lock().unwrap().remove(&id);
            })
        }
    }
}
