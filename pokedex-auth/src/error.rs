//! Error types for the auth layer.

use thiserror::Error;

/// Result type for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors surfaced by the identity provider or the session service.
///
/// Every rejection a caller can hit has its own kind so the notification
/// layer can render a specific message. Nothing is retried automatically.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Wrong email/password combination.
    #[error("invalid credential")]
    InvalidCredential,

    /// Sign-up attempted with an email that already has an account.
    #[error("email already in use")]
    EmailInUse,

    /// Sign-up rejected because the password is too weak.
    #[error("weak password")]
    WeakPassword,

    /// Password reset requested for an unknown email.
    #[error("user not found")]
    UserNotFound,

    /// The provider throttled the caller.
    #[error("rate limited")]
    RateLimited,

    /// Transport failure talking to the provider.
    #[error("network error: {0}")]
    Network(String),

    /// Caller-supplied input was malformed; rejected before any
    /// provider call.
    #[error("validation error: {0}")]
    Validation(String),
}

impl AuthError {
    /// Human-readable message for user-facing notifications.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredential => "Invalid email or password.".to_string(),
            Self::EmailInUse => "This email is already in use.".to_string(),
            Self::WeakPassword => {
                "Password should be at least 6 characters.".to_string()
            }
            Self::UserNotFound => "No account matches this email.".to_string(),
            Self::RateLimited => {
                "Too many attempts. Please try again later.".to_string()
            }
            Self::Network(_) => {
                "A network error occurred. Check your connection.".to_string()
            }
            Self::Validation(message) => message.clone(),
        }
    }

    /// Whether the error was raised before any provider call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
