use super::*;

#[test]
fn wrong_password_and_unknown_account_share_one_message() {
    // Both provider outcomes map to InvalidCredential upstream; the message
    // must not reveal whether the account exists.
    let err = AuthFlowError::Identity(IdentityError::InvalidCredential);
    assert_eq!(err.user_message(), "Invalid email or password.");
}

#[test]
fn setup_failure_uses_generic_message() {
    assert_eq!(
        AuthFlowError::SetupFailed.user_message(),
        "Account setup failed. Please try again."
    );
}

#[test]
fn raw_error_bodies_never_reach_user_messages() {
    let err = AuthFlowError::Identity(IdentityError::Provider(
        "500 internal: stack trace at line 42".to_owned(),
    ));
    assert!(!err.user_message().contains("stack trace"));

    let err = AuthFlowError::Identity(IdentityError::Network("dns failure".to_owned()));
    assert!(!err.user_message().contains("dns"));
}

#[test]
fn weak_password_message_is_actionable() {
    let err = AuthFlowError::Identity(IdentityError::WeakCredential);
    assert!(err.user_message().contains("at least 6"));
}
