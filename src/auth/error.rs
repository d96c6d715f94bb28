//! Error taxonomy for the auth flows.
//!
//! Raw provider and backend errors never reach the UI: every terminal
//! failure is flattened to a short user message via `user_message`, and the
//! no-account / wrong-password cases share one generic message so the login
//! form cannot be used to enumerate accounts.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failures reported by the external identity provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("password does not meet the provider's minimum policy")]
    WeakCredential,
    #[error("email address is already registered")]
    EmailInUse,
    #[error("invalid credentials")]
    InvalidCredential,
    #[error("social sign-in was cancelled")]
    SocialCancelled,
    #[error("social sign-in failed: {0}")]
    SocialFailed(String),
    #[error("identity provider error: {0}")]
    Provider(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Failures from the backend while synchronizing a principal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// 409: the record already exists. Treated as success by the
    /// idempotent flows.
    #[error("resource already exists")]
    Conflict,
    #[error("resource not found")]
    NotFound,
    #[error("backend rejected the request: {0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Terminal failure of an explicit `register`/`sign_in` action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthFlowError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    /// Backend user creation was rejected during registration; the identity
    /// account has been rolled back.
    #[error("account setup failed")]
    SetupFailed,
}

impl AuthFlowError {
    /// Short message safe to show in a form or toast. Never includes raw
    /// error bodies.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Identity(IdentityError::WeakCredential) => {
                "Password is too weak. Use at least 6 characters."
            }
            Self::Identity(IdentityError::EmailInUse) => {
                "An account with this email already exists."
            }
            Self::Identity(IdentityError::InvalidCredential) => "Invalid email or password.",
            Self::Identity(IdentityError::SocialCancelled) => "Sign-in was cancelled.",
            Self::Identity(IdentityError::SocialFailed(_)) => "Social sign-in failed. Try again.",
            Self::Identity(IdentityError::Provider(_) | IdentityError::Network(_)) => {
                "Something went wrong. Please try again."
            }
            Self::SetupFailed => "Account setup failed. Please try again.",
        }
    }
}
