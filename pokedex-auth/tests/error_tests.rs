use pokedex_auth::AuthError;

#[test]
fn every_kind_has_a_user_message() {
    let kinds = [
        AuthError::InvalidCredential,
        AuthError::EmailInUse,
        AuthError::WeakPassword,
        AuthError::UserNotFound,
        AuthError::RateLimited,
        AuthError::Network("connection reset".to_string()),
        AuthError::Validation("You must provide an email.".to_string()),
    ];
    for kind in kinds {
        assert!(!kind.user_message().is_empty());
    }
}

#[test]
fn validation_message_passes_through() {
    let err = AuthError::Validation("You must provide an email.".to_string());
    assert_eq!(err.user_message(), "You must provide an email.");
    assert!(err.is_validation());
}

#[test]
fn network_message_does_not_leak_transport_detail() {
    let err = AuthError::Network("tls handshake eof".to_string());
    assert!(!err.user_message().contains("tls"));
}

#[test]
fn display_is_lowercase_and_terse() {
    assert_eq!(AuthError::InvalidCredential.to_string(), "invalid credential");
    assert_eq!(AuthError::EmailInUse.to_string(), "email already in use");
}
