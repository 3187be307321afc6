//! Route access guard.
//!
//! A pure function of a route's access policy and the current session
//! state: either the route renders, or the caller must navigate to a
//! fallback route and render nothing further. Evaluated again on every
//! session change — no polling.

use pokedex_types::SessionState;

/// Access policy attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Anyone may view.
    Public,
    /// Only signed-out visitors (sign-in, sign-up, forgot-password pages);
    /// signed-in users are sent to their collection.
    AuthOnly,
    /// Requires a signed-in user.
    Protected,
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the route.
    Allowed,
    /// Navigate to the given route and render nothing.
    Redirect(String),
}

/// Fallback routes used when a policy blocks the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    /// Where signed-in users land when blocked from an auth-only page.
    pub collection_route: String,
    /// Where signed-out visitors land when blocked from a protected page.
    pub sign_in_route: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            collection_route: "/pokedex".to_string(),
            sign_in_route: "/".to_string(),
        }
    }
}

/// Gates navigation on session presence.
///
/// `Pending` counts as "no user present": a protected page stays blocked
/// until the in-flight auth call settles.
#[derive(Debug, Clone, Default)]
pub struct RedirectGuard {
    config: GuardConfig,
}

impl RedirectGuard {
    /// Creates a guard with custom fallback routes.
    pub fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    /// Decides whether the route renders for the given session.
    pub fn evaluate(&self, policy: AccessPolicy, session: &SessionState) -> GuardDecision {
        match policy {
            AccessPolicy::Public => GuardDecision::Allowed,
            AccessPolicy::AuthOnly => {
                if session.is_authenticated() {
                    GuardDecision::Redirect(self.config.collection_route.clone())
                } else {
                    GuardDecision::Allowed
                }
            }
            AccessPolicy::Protected => {
                if session.is_authenticated() {
                    GuardDecision::Allowed
                } else {
                    GuardDecision::Redirect(self.config.sign_in_route.clone())
                }
            }
        }
    }
}
