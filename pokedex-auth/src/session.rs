//! The authentication session service.
//!
//! Single source of truth for "who is logged in". Explicitly constructed
//! around an [`IdentityProvider`], handed to consumers as an
//! `Arc<AuthSession>`, and torn down with [`AuthSession::shutdown`].
//! All other components observe the session; none of them mutate it.

use crate::error::{AuthError, AuthResult};
use crate::provider::{IdentityProvider, ProviderWatch};
use pokedex_types::{SessionState, User};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use tracing::{debug, info, warn};

/// Callback invoked synchronously on every session-state change.
pub type SessionListener = Box<dyn Fn(&SessionState) + Send + Sync>;

type ObserverList = Arc<Mutex<Vec<(u64, SessionListener)>>>;

/// Handle returned by [`AuthSession::subscribe`]; dropping it
/// unsubscribes the listener.
pub struct SessionObserver {
    id: u64,
    observers: Weak<Mutex<Vec<(u64, SessionListener)>>>,
}

impl Drop for SessionObserver {
    fn drop(&mut self) {
        if let Some(observers) = self.observers.upgrade() {
            observers.lock().unwrap().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Process-wide authentication state with an observer list.
///
/// Operations drive the state machine
/// `Unauthenticated | Pending | Authenticated`; `Pending` is transient
/// while a provider call is in flight, and a failed call restores the
/// state captured before the call started. Provider-initiated changes
/// (restored session, expiry) are folded in through the provider's
/// auth-state stream.
pub struct AuthSession {
    provider: Arc<dyn IdentityProvider>,
    state: Mutex<SessionState>,
    observers: ObserverList,
    next_observer_id: AtomicU64,
    provider_watch: Mutex<Option<ProviderWatch>>,
}

impl AuthSession {
    /// Creates the session service and attaches it to the provider's
    /// auth-state stream.
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Arc<Self> {
        let session = Arc::new(Self {
            provider,
            state: Mutex::new(SessionState::Unauthenticated),
            observers: Arc::new(Mutex::new(Vec::new())),
            next_observer_id: AtomicU64::new(0),
            provider_watch: Mutex::new(None),
        });

        let weak = Arc::downgrade(&session);
        let watch = session
            .provider
            .on_auth_state_changed(Box::new(move |user| {
                if let Some(session) = weak.upgrade() {
                    session.apply_provider_state(user);
                }
            }));
        *session.provider_watch.lock().unwrap() = Some(watch);

        session
    }

    /// Returns a snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.state.lock().unwrap().clone()
    }

    /// Returns the signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.state.lock().unwrap().user().cloned()
    }

    /// Registers a listener invoked synchronously whenever the state
    /// changes. Listeners must not subscribe or unsubscribe re-entrantly.
    pub fn subscribe(
        &self,
        listener: impl Fn(&SessionState) + Send + Sync + 'static,
    ) -> SessionObserver {
        let id = self.next_observer_id.fetch_add(1, Ordering::SeqCst);
        self.observers.lock().unwrap().push((id, Box::new(listener)));
        SessionObserver {
            id,
            observers: Arc::downgrade(&self.observers),
        }
    }

    /// Detaches from the provider and drops all observers.
    ///
    /// After shutdown the session no longer reacts to provider-initiated
    /// changes; the held state is left as-is for final reads.
    pub fn shutdown(&self) {
        debug!("auth session shutting down");
        self.provider_watch.lock().unwrap().take();
        self.observers.lock().unwrap().clear();
    }

    // ── Operations ───────────────────────────────────────────────

    /// Authenticates an existing account.
    ///
    /// On success the state becomes `Authenticated`; on failure the state
    /// captured before the call is restored and the error is returned.
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<User> {
        validate_credentials(email, password)?;

        let previous = self.begin_pending();
        match self.provider.sign_in(email, password).await {
            Ok(user) => {
                info!(user = %user.id, "signed in");
                self.set_state(SessionState::Authenticated(user.clone()));
                Ok(user)
            }
            Err(err) => {
                warn!(error = %err, "sign-in failed");
                self.restore_if_pending(previous);
                Err(err)
            }
        }
    }

    /// Creates a new account and signs it in.
    pub async fn sign_up(&self, email: &str, password: &str) -> AuthResult<User> {
        validate_credentials(email, password)?;

        let previous = self.begin_pending();
        match self.provider.sign_up(email, password).await {
            Ok(user) => {
                info!(user = %user.id, "signed up");
                self.set_state(SessionState::Authenticated(user.clone()));
                Ok(user)
            }
            Err(err) => {
                warn!(error = %err, "sign-up failed");
                self.restore_if_pending(previous);
                Err(err)
            }
        }
    }

    /// Dispatches a password-reset email.
    ///
    /// Side effect only — the session state never changes. An empty email
    /// is rejected before any provider call.
    pub async fn send_password_reset(&self, email: &str) -> AuthResult<()> {
        if email.is_empty() {
            return Err(AuthError::Validation(
                "You must provide an email.".to_string(),
            ));
        }

        match self.provider.send_password_reset(email).await {
            Ok(()) => {
                info!("password reset email dispatched");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "password reset failed");
                Err(err)
            }
        }
    }

    /// Ends the session. Idempotent: signing out while signed out is a
    /// no-op that still succeeds.
    pub async fn sign_out(&self) -> AuthResult<()> {
        let result = self.provider.sign_out().await;
        // The local session ends regardless of whether the provider call
        // made it through.
        self.set_state(SessionState::Unauthenticated);
        match result {
            Ok(()) => {
                info!("signed out");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "provider sign-out failed");
                Err(err)
            }
        }
    }

    // ── State machine internals ──────────────────────────────────

    /// Folds a provider-initiated change into the session state.
    fn apply_provider_state(&self, user: Option<User>) {
        let next = match user {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Unauthenticated,
        };
        self.set_state(next);
    }

    /// Enters `Pending`, returning the state to restore on failure.
    fn begin_pending(&self) -> SessionState {
        let previous = {
            let mut state = self.state.lock().unwrap();
            let previous = state.clone();
            *state = SessionState::Pending;
            previous
        };
        self.notify(&SessionState::Pending);
        previous
    }

    /// Restores `previous` if the state is still `Pending`. A provider
    /// push that landed mid-call wins over the restore.
    fn restore_if_pending(&self, previous: SessionState) {
        let restored = {
            let mut state = self.state.lock().unwrap();
            if state.is_pending() {
                *state = previous.clone();
                true
            } else {
                false
            }
        };
        if restored {
            self.notify(&previous);
        }
    }

    /// Updates the state, notifying observers only on actual change.
    fn set_state(&self, next: SessionState) {
        let changed = {
            let mut state = self.state.lock().unwrap();
            if *state == next {
                false
            } else {
                *state = next.clone();
                true
            }
        };
        if changed {
            debug!(authenticated = next.is_authenticated(), "session state changed");
            self.notify(&next);
        }
    }

    fn notify(&self, state: &SessionState) {
        let observers = self.observers.lock().unwrap();
        for (_, listener) in observers.iter() {
            listener(state);
        }
    }
}

/// Rejects malformed credentials before any provider call.
fn validate_credentials(email: &str, password: &str) -> AuthResult<()> {
    if email.is_empty() {
        return Err(AuthError::Validation(
            "You must provide an email.".to_string(),
        ));
    }
    if password.is_empty() {
        return Err(AuthError::Validation(
            "You must provide a password.".to_string(),
        ));
    }
    Ok(())
}
