use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::auth::error::IdentityError;
use crate::auth::identity::{IdentityPort, SocialProvider};

// =============================================================
// Mock ports
// =============================================================

#[derive(Default)]
struct MockIdp {
    /// Emails with live provider accounts.
    accounts: RefCell<Vec<String>>,
    deleted: RefCell<Vec<String>>,
    signed_out: RefCell<bool>,
    fail_create: Option<IdentityError>,
    fail_sign_in: Option<IdentityError>,
}

fn identity_for(email: &str) -> Identity {
    Identity {
        uid: format!("uid-{email}"),
        email: email.to_owned(),
        display_name: "Someone".to_owned(),
        photo_url: None,
        id_token: "tok".to_owned(),
        refresh_token: "refresh".to_owned(),
    }
}

impl IdentityPort for MockIdp {
    async fn create_account(
        &self,
        name: &str,
        email: &str,
        _password: &str,
        photo_url: Option<&str>,
    ) -> Result<Identity, IdentityError> {
        if let Some(err) = &self.fail_create {
            return Err(err.clone());
        }
        self.accounts.borrow_mut().push(email.to_owned());
        let mut identity = identity_for(email);
        identity.display_name = name.to_owned();
        identity.photo_url = photo_url.map(str::to_owned);
        Ok(identity)
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<Identity, IdentityError> {
        if let Some(err) = &self.fail_sign_in {
            return Err(err.clone());
        }
        Ok(identity_for(email))
    }

    async fn sign_in_with_provider(
        &self,
        _provider: SocialProvider,
    ) -> Result<Identity, IdentityError> {
        Ok(identity_for("social@x.com"))
    }

    async fn update_profile(
        &self,
        identity: &Identity,
        name: &str,
        photo_url: Option<&str>,
    ) -> Result<Identity, IdentityError> {
        let mut updated = identity.clone();
        updated.display_name = name.to_owned();
        updated.photo_url = photo_url.map(str::to_owned);
        Ok(updated)
    }

    async fn delete_account(&self, identity: &Identity) -> Result<(), IdentityError> {
        self.accounts.borrow_mut().retain(|e| e != &identity.email);
        self.deleted.borrow_mut().push(identity.email.clone());
        Ok(())
    }

    async fn sign_out(&self) {
        *self.signed_out.borrow_mut() = true;
    }

    async fn fresh_token(&self) -> Option<String> {
        Some("tok".to_owned())
    }
}

#[derive(Default)]
struct MockBackend {
    /// Emails with existing backend user records.
    users: RefCell<Vec<String>>,
    calls: RefCell<Vec<String>>,
    role: Option<Role>,
    fail_role: bool,
    fail_login: bool,
    fail_logout: bool,
    reject_create: bool,
    fail_lookup: bool,
}

impl BackendPort for MockBackend {
    async fn user_exists(&self, email: &str) -> Result<bool, BackendError> {
        self.calls.borrow_mut().push("lookup".to_owned());
        if self.fail_lookup {
            return Err(BackendError::Network("timeout".to_owned()));
        }
        Ok(self.users.borrow().iter().any(|e| e == email))
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), BackendError> {
        self.calls.borrow_mut().push("create".to_owned());
        if self.reject_create {
            return Err(BackendError::Rejected("validation failed".to_owned()));
        }
        if self.users.borrow().iter().any(|e| e == &user.email) {
            return Err(BackendError::Conflict);
        }
        self.users.borrow_mut().push(user.email.clone());
        Ok(())
    }

    async fn touch_last_sign_in(&self, _email: &str, _when: &str) -> Result<(), BackendError> {
        self.calls.borrow_mut().push("touch".to_owned());
        Ok(())
    }

    async fn login(&self, _email: &str) -> Result<(), BackendError> {
        self.calls.borrow_mut().push("login".to_owned());
        if self.fail_login {
            return Err(BackendError::Network("connection refused".to_owned()));
        }
        Ok(())
    }

    async fn logout(&self) -> Result<(), BackendError> {
        self.calls.borrow_mut().push("logout".to_owned());
        if self.fail_logout {
            return Err(BackendError::Network("connection refused".to_owned()));
        }
        Ok(())
    }

    async fn fetch_role(&self, _email: &str) -> Result<Role, BackendError> {
        self.calls.borrow_mut().push("role".to_owned());
        if self.fail_role {
            return Err(BackendError::NotFound);
        }
        Ok(self.role.unwrap_or_default())
    }
}

// =============================================================
// Sign-in and role resolution
// =============================================================

#[test]
fn sign_in_resolves_backend_role() {
    let idp = MockIdp::default();
    let backend = MockBackend { role: Some(Role::Admin), ..MockBackend::default() };

    let session = block_on(run_sign_in(&idp, &backend, "a@x.com", "pw")).expect("session");
    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.identity.email, "a@x.com");
}

#[test]
fn role_failure_degrades_to_member_not_anonymous() {
    let idp = MockIdp::default();
    let backend = MockBackend { fail_role: true, ..MockBackend::default() };

    let session = block_on(run_sign_in(&idp, &backend, "a@x.com", "pw")).expect("session");
    // Still authenticated, just under-privileged.
    assert_eq!(session.role, Role::Member);
}

#[test]
fn session_cookie_failure_does_not_unwind_sign_in() {
    let idp = MockIdp::default();
    let backend = MockBackend {
        fail_login: true,
        role: Some(Role::Trainer),
        ..MockBackend::default()
    };

    let session = block_on(run_sign_in(&idp, &backend, "t@x.com", "pw")).expect("session");
    assert_eq!(session.role, Role::Trainer);
}

#[test]
fn invalid_credentials_surface_to_caller() {
    let idp = MockIdp {
        fail_sign_in: Some(IdentityError::InvalidCredential),
        ..MockIdp::default()
    };
    let backend = MockBackend::default();

    let err = block_on(run_sign_in(&idp, &backend, "a@x.com", "wrong")).unwrap_err();
    assert_eq!(err, AuthFlowError::Identity(IdentityError::InvalidCredential));
    // No backend traffic for a failed provider sign-in.
    assert!(backend.calls.borrow().is_empty());
}

#[test]
fn sync_ordering_is_ensure_then_login_then_role() {
    let idp = MockIdp::default();
    let backend = MockBackend::default();

    block_on(run_sign_in(&idp, &backend, "a@x.com", "pw")).expect("session");
    assert_eq!(
        backend.calls.borrow().as_slice(),
        &["lookup", "create", "login", "touch", "role"]
    );
}

// =============================================================
// Idempotence (explicit action + passive watch double-invocation)
// =============================================================

#[test]
fn repeated_sync_creates_only_one_backend_user() {
    let idp = MockIdp::default();
    let backend = MockBackend::default();

    block_on(run_sign_in(&idp, &backend, "a@x.com", "pw")).expect("first");
    block_on(run_sign_in(&idp, &backend, "a@x.com", "pw")).expect("second");

    let creates = backend.calls.borrow().iter().filter(|c| *c == "create").count();
    assert_eq!(creates, 1);
    assert_eq!(backend.users.borrow().len(), 1);
}

#[test]
fn create_conflict_counts_as_success() {
    // Lookup fails (simulated race) and the create attempt conflicts.
    let backend = MockBackend {
        users: RefCell::new(vec!["a@x.com".to_owned()]),
        fail_lookup: true,
        ..MockBackend::default()
    };
    let result = block_on(ensure_backend_user(&backend, &identity_for("a@x.com")));
    assert!(result.is_ok());
}

// =============================================================
// Registration rollback
// =============================================================

#[test]
fn rejected_registration_rolls_back_identity_account() {
    let idp = MockIdp::default();
    let backend = MockBackend { reject_create: true, ..MockBackend::default() };

    let err = block_on(run_register(&idp, &backend, "New User", "n@x.com", "pw123456", None))
        .unwrap_err();
    assert_eq!(err, AuthFlowError::SetupFailed);

    // The provider account created in the same call no longer exists.
    assert!(idp.accounts.borrow().is_empty());
    assert_eq!(idp.deleted.borrow().as_slice(), &["n@x.com"]);
}

#[test]
fn successful_registration_keeps_both_records() {
    let idp = MockIdp::default();
    let backend = MockBackend::default();

    let session =
        block_on(run_register(&idp, &backend, "New User", "n@x.com", "pw123456", Some("p.png")))
            .expect("session");
    assert_eq!(session.identity.display_name, "New User");
    assert_eq!(session.identity.photo_url.as_deref(), Some("p.png"));
    assert_eq!(idp.accounts.borrow().as_slice(), &["n@x.com"]);
    assert_eq!(backend.users.borrow().as_slice(), &["n@x.com"]);
    assert!(idp.deleted.borrow().is_empty());
}

#[test]
fn weak_password_fails_before_any_backend_call() {
    let idp = MockIdp {
        fail_create: Some(IdentityError::WeakCredential),
        ..MockIdp::default()
    };
    let backend = MockBackend::default();

    let err = block_on(run_register(&idp, &backend, "N", "n@x.com", "123", None)).unwrap_err();
    assert_eq!(err, AuthFlowError::Identity(IdentityError::WeakCredential));
    assert!(backend.calls.borrow().is_empty());
}

// =============================================================
// Sign-out
// =============================================================

#[test]
fn log_out_completes_even_when_backend_is_down() {
    let idp = MockIdp::default();
    let backend = MockBackend { fail_logout: true, ..MockBackend::default() };

    block_on(run_log_out(&idp, &backend));
    // Provider teardown still ran; the store then forces Anonymous.
    assert!(*idp.signed_out.borrow());
}

// =============================================================
// Social sign-in
// =============================================================

#[test]
fn social_sign_in_runs_full_sync() {
    let idp = MockIdp::default();
    let backend = MockBackend { role: Some(Role::Member), ..MockBackend::default() };

    let session =
        block_on(run_social_sign_in(&idp, &backend, SocialProvider::Google)).expect("session");
    assert_eq!(session.identity.email, "social@x.com");
    assert_eq!(backend.users.borrow().as_slice(), &["social@x.com"]);
}
