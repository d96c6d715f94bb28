//! Backend session bridge: reconciles a verified identity-provider
//! principal with our own backend.
//!
//! ORDERING CONTRACT
//! =================
//! ensure-user → establish session cookie → touch last-sign-in → resolve
//! role. Ensure-user must complete (or fail and roll back, during
//! registration) before the session cookie is requested. Role resolution is
//! last and never unwinds a successful sign-in: any failure there degrades
//! to `Role::Member` rather than signing the user out.
//!
//! Every step is idempotent because the explicit `sign_in`/`register`
//! actions and the passive provider watch both run this sequence for the
//! same principal; the second pass must be a no-op, not an error.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use crate::state::auth::{Identity, Role, Session};

use super::error::{AuthFlowError, BackendError};
use super::identity::IdentityPort;

/// Payload for creating our backend user record.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub display_name: String,
    pub photo_url: Option<String>,
    pub role: Role,
    pub last_sign_in_time: String,
}

impl NewUser {
    /// New backend records always start as plain members; elevation happens
    /// out of band.
    #[must_use]
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            email: identity.email.clone(),
            display_name: identity.display_name.clone(),
            photo_url: identity.photo_url.clone(),
            role: Role::Member,
            last_sign_in_time: crate::util::time::now_iso(),
        }
    }
}

/// Operations against the backend REST service used by the auth flows.
#[allow(async_fn_in_trait)]
pub trait BackendPort {
    async fn user_exists(&self, email: &str) -> Result<bool, BackendError>;
    async fn create_user(&self, user: &NewUser) -> Result<(), BackendError>;
    async fn touch_last_sign_in(&self, email: &str, when: &str) -> Result<(), BackendError>;
    /// `POST /login` with credentials enabled; sets the HTTP-only session
    /// cookie. The client never reads the cookie itself.
    async fn login(&self, email: &str) -> Result<(), BackendError>;
    async fn logout(&self) -> Result<(), BackendError>;
    async fn fetch_role(&self, email: &str) -> Result<Role, BackendError>;
}

/// Make sure a backend user record exists for the principal.
///
/// Check-then-create; a concurrent creation surfacing as `Conflict` counts
/// as success. A failed existence lookup falls through to the create
/// attempt so a transient lookup error cannot block sign-in.
pub async fn ensure_backend_user<B: BackendPort>(
    backend: &B,
    identity: &Identity,
) -> Result<(), BackendError> {
    match backend.user_exists(&identity.email).await {
        Ok(true) => return Ok(()),
        Ok(false) => {}
        Err(e) => {
            leptos::logging::warn!("user lookup failed, attempting create: {e}");
        }
    }
    match backend.create_user(&NewUser::from_identity(identity)).await {
        Ok(()) | Err(BackendError::Conflict) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Establish the server-side session cookie. Best-effort: on failure the
/// caller proceeds and role resolution degrades to `Member`.
pub async fn establish_session<B: BackendPort>(backend: &B, email: &str) -> bool {
    match backend.login(email).await {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::warn!("session cookie not established: {e}");
            false
        }
    }
}

/// Resolve the authorization role, defaulting to `Member` on any failure.
/// Least-privilege fallback is deliberate: a blip here must not block
/// login, it only under-privileges the session until the next sync.
pub async fn resolve_role<B: BackendPort>(backend: &B, email: &str) -> Role {
    match backend.fetch_role(email).await {
        Ok(role) => role,
        Err(e) => {
            leptos::logging::warn!("role resolution failed, defaulting to member: {e}");
            Role::Member
        }
    }
}

/// Run the full sync sequence for an established principal. Infallible:
/// the worst outcome is an authenticated member session.
pub async fn sync_session<B: BackendPort>(backend: &B, identity: Identity) -> Session {
    if let Err(e) = ensure_backend_user(backend, &identity).await {
        leptos::logging::warn!("backend user sync degraded: {e}");
    }
    establish_session(backend, &identity.email).await;
    let now = crate::util::time::now_iso();
    if let Err(e) = backend.touch_last_sign_in(&identity.email, &now).await {
        leptos::logging::warn!("last-sign-in update failed: {e}");
    }
    let role = resolve_role(backend, &identity.email).await;
    Session { identity, role }
}

/// Explicit credential sign-in: provider first, then the sync sequence.
pub async fn run_sign_in<I: IdentityPort, B: BackendPort>(
    idp: &I,
    backend: &B,
    email: &str,
    password: &str,
) -> Result<Session, AuthFlowError> {
    let identity = idp.sign_in(email, password).await?;
    Ok(sync_session(backend, identity).await)
}

/// Account creation with compensating rollback.
///
/// If the backend rejects the user record for any reason other than
/// "already exists", the identity-provider account created moments ago is
/// deleted again; an identity with no backend record would otherwise be
/// orphaned forever.
pub async fn run_register<I: IdentityPort, B: BackendPort>(
    idp: &I,
    backend: &B,
    name: &str,
    email: &str,
    password: &str,
    photo_url: Option<&str>,
) -> Result<Session, AuthFlowError> {
    let identity = idp.create_account(name, email, password, photo_url).await?;

    if let Err(e) = ensure_backend_user(backend, &identity).await {
        leptos::logging::warn!("backend rejected new user, rolling back: {e}");
        if let Err(del) = idp.delete_account(&identity).await {
            leptos::logging::warn!("identity rollback failed: {del}");
        }
        return Err(AuthFlowError::SetupFailed);
    }

    Ok(sync_session(backend, identity).await)
}

/// Social sign-in follows the same shape as credential sign-in, but the
/// principal may be brand new; ensure-user inside the sync handles both.
pub async fn run_social_sign_in<I: IdentityPort, B: BackendPort>(
    idp: &I,
    backend: &B,
    provider: super::identity::SocialProvider,
) -> Result<Session, AuthFlowError> {
    let identity = idp.sign_in_with_provider(provider).await?;
    Ok(sync_session(backend, identity).await)
}

/// Sign out everywhere. Both network calls are best-effort; the local
/// session is always cleared, so this cannot fail.
pub async fn run_log_out<I: IdentityPort, B: BackendPort>(idp: &I, backend: &B) {
    if let Err(e) = backend.logout().await {
        leptos::logging::warn!("backend logout failed, clearing local session anyway: {e}");
    }
    idp.sign_out().await;
}
