//! Client for the external identity provider.
//!
//! ARCHITECTURE
//! ============
//! The provider is an opaque hosted service speaking JSON over HTTPS. This
//! module exposes it behind the `IdentityPort` trait so the auth flows in
//! `bridge`/`store` stay testable on the host; `RestIdentityProvider` is the
//! browser implementation (hydrate only, SSR stubs, same split as
//! `net::api`).
//!
//! Session restoration: the provider's refresh token and the last known
//! profile are persisted in localStorage. `restore_session` exchanges the
//! refresh token for a fresh ID token on boot and notifies watchers, so the
//! app sees exactly one principal-change callback per page load.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::state::auth::Identity;

use super::error::IdentityError;

/// Social sign-in providers offered on the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Github,
}

impl SocialProvider {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
        }
    }
}

/// Operations against the external identity service.
///
/// Implementations must refresh the bearer token on every `fresh_token`
/// call; ID tokens are short-lived and never cached across requests.
#[allow(async_fn_in_trait)]
pub trait IdentityPort {
    async fn create_account(
        &self,
        name: &str,
        email: &str,
        password: &str,
        photo_url: Option<&str>,
    ) -> Result<Identity, IdentityError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, IdentityError>;

    async fn sign_in_with_provider(
        &self,
        provider: SocialProvider,
    ) -> Result<Identity, IdentityError>;

    async fn update_profile(
        &self,
        identity: &Identity,
        name: &str,
        photo_url: Option<&str>,
    ) -> Result<Identity, IdentityError>;

    /// Delete the principal's account. Compensating action for a failed
    /// backend registration.
    async fn delete_account(&self, identity: &Identity) -> Result<(), IdentityError>;

    /// Tear down the provider session. The local session is cleared even
    /// when the network call fails; this never returns an error.
    async fn sign_out(&self);

    async fn fresh_token(&self) -> Option<String>;
}

/// Map a provider error code to our taxonomy.
///
/// Unknown-account and wrong-password codes intentionally collapse into
/// `InvalidCredential` so the UI cannot distinguish them.
#[must_use]
pub fn map_provider_code(code: &str) -> IdentityError {
    let code = code.split(':').next().unwrap_or(code).trim();
    match code {
        c if c.starts_with("WEAK_PASSWORD") => IdentityError::WeakCredential,
        "EMAIL_EXISTS" => IdentityError::EmailInUse,
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" | "USER_DISABLED" => {
            IdentityError::InvalidCredential
        }
        other => IdentityError::Provider(other.to_owned()),
    }
}

/// Extract the error code from a provider error body,
/// `{"error":{"message":"EMAIL_EXISTS"}}`.
#[must_use]
pub fn error_from_body(body: &str) -> IdentityError {
    let code = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_owned)
        });
    match code {
        Some(c) => map_provider_code(&c),
        None => IdentityError::Provider("unrecognized error response".to_owned()),
    }
}

/// Process-wide principal-change notifications.
///
/// The provider's notion of "current principal" changes on sign-in,
/// registration, sign-out, account deletion, and the initial restoration.
/// Exactly one callback round fires per change, for the lifetime of the
/// page.
pub mod watch {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::state::auth::Identity;

    thread_local! {
        static SUBSCRIBERS: RefCell<Vec<Rc<dyn Fn(Option<Identity>)>>> =
            RefCell::new(Vec::new());
    }

    /// Register a callback for principal changes. Lives for the page's
    /// lifetime; there is no unsubscribe.
    pub fn subscribe(cb: impl Fn(Option<Identity>) + 'static) {
        SUBSCRIBERS.with(|subs| subs.borrow_mut().push(Rc::new(cb)));
    }

    /// Notify all watchers. The list is snapshotted first so a callback
    /// that subscribes reentrantly does not deadlock the borrow.
    pub fn notify(identity: Option<&Identity>) {
        let snapshot: Vec<_> = SUBSCRIBERS.with(|subs| subs.borrow().clone());
        for cb in snapshot {
            cb(identity.cloned());
        }
    }
}

/// Browser implementation of `IdentityPort` against the hosted provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct RestIdentityProvider;

#[cfg(feature = "hydrate")]
const IDP_BASE: &str = match option_env!("FITPULSE_IDP_BASE") {
    Some(base) => base,
    None => "/idp/v1",
};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "fitpulse_idp_session";

/// Key the OAuth callback page writes its result under; polled by the
/// popup flow.
#[cfg(feature = "hydrate")]
const HANDOFF_KEY: &str = "fitpulse_oauth_result";

#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct PrincipalResponse {
    local_id: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    id_token: String,
    refresh_token: String,
}

#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct StoredCredentials {
    refresh_token: String,
    identity: Identity,
}

#[cfg(feature = "hydrate")]
impl PrincipalResponse {
    fn into_identity(self) -> Identity {
        Identity {
            uid: self.local_id,
            email: self.email,
            display_name: self.display_name.unwrap_or_default(),
            photo_url: self.photo_url,
            id_token: self.id_token,
            refresh_token: self.refresh_token,
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use super::{
        HANDOFF_KEY, IDP_BASE, Identity, IdentityError, PrincipalResponse, STORAGE_KEY,
        StoredCredentials, error_from_body,
    };

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    pub(super) fn persist(identity: &Identity) {
        let creds = StoredCredentials {
            refresh_token: identity.refresh_token.clone(),
            identity: identity.clone(),
        };
        if let (Some(storage), Ok(json)) = (storage(), serde_json::to_string(&creds)) {
            let _ = storage.set_item(STORAGE_KEY, &json);
        }
    }

    pub(super) fn clear_persisted() {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }

    pub(super) fn load_persisted() -> Option<StoredCredentials> {
        let json = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        serde_json::from_str(&json).ok()
    }

    pub(super) fn take_handoff() -> Option<String> {
        let storage = storage()?;
        let value = storage.get_item(HANDOFF_KEY).ok().flatten()?;
        let _ = storage.remove_item(HANDOFF_KEY);
        Some(value)
    }

    pub(super) async fn post_json(
        path: &str,
        body: &serde_json::Value,
    ) -> Result<gloo_net::http::Response, IdentityError> {
        gloo_net::http::Request::post(&format!("{IDP_BASE}{path}"))
            .json(body)
            .map_err(|e| IdentityError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))
    }

    /// POST to the provider and parse a principal from the response,
    /// mapping provider error bodies on non-2xx.
    pub(super) async fn request_principal(
        path: &str,
        body: &serde_json::Value,
    ) -> Result<Identity, IdentityError> {
        let resp = post_json(path, body).await?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(error_from_body(&text));
        }
        let principal: PrincipalResponse = resp
            .json()
            .await
            .map_err(|e| IdentityError::Provider(e.to_string()))?;
        Ok(principal.into_identity())
    }

    /// Exchange the persisted refresh token for a fresh ID token.
    pub(super) async fn refresh(refresh_token: &str) -> Result<String, IdentityError> {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct TokenResponse {
            id_token: String,
        }
        let resp = post_json(
            "/token",
            &serde_json::json!({
                "grantType": "refresh_token",
                "refreshToken": refresh_token,
            }),
        )
        .await?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(error_from_body(&text));
        }
        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| IdentityError::Provider(e.to_string()))?;
        Ok(token.id_token)
    }
}

impl RestIdentityProvider {
    /// Restore a persisted provider session on boot and fire the initial
    /// watch notification. Call once from app startup.
    pub async fn restore_session(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(creds) = browser::load_persisted() else {
                watch::notify(None);
                return;
            };
            match browser::refresh(&creds.refresh_token).await {
                Ok(id_token) => {
                    let mut identity = creds.identity;
                    identity.id_token = id_token;
                    browser::persist(&identity);
                    watch::notify(Some(&identity));
                }
                Err(e) => {
                    leptos::logging::warn!("session restore failed: {e}");
                    browser::clear_persisted();
                    watch::notify(None);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            watch::notify(None);
        }
    }
}

impl IdentityPort for RestIdentityProvider {
    async fn create_account(
        &self,
        name: &str,
        email: &str,
        password: &str,
        photo_url: Option<&str>,
    ) -> Result<Identity, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let identity = browser::request_principal(
                "/accounts/sign-up",
                &serde_json::json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;
            // Push the display profile before handing the principal back.
            let identity = self.update_profile(&identity, name, photo_url).await?;
            browser::persist(&identity);
            watch::notify(Some(&identity));
            Ok(identity)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, email, password, photo_url);
            Err(IdentityError::Network("not available on server".to_owned()))
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let identity = browser::request_principal(
                "/accounts/sign-in",
                &serde_json::json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;
            browser::persist(&identity);
            watch::notify(Some(&identity));
            Ok(identity)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(IdentityError::Network("not available on server".to_owned()))
        }
    }

    async fn sign_in_with_provider(
        &self,
        provider: SocialProvider,
    ) -> Result<Identity, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()
                .ok_or_else(|| IdentityError::Network("no window".to_owned()))?;
            let url = format!("{IDP_BASE}/oauth/{}/start", provider.id());
            let popup = window
                .open_with_url_and_target(&url, "fitpulse_oauth")
                .ok()
                .flatten()
                .ok_or_else(|| {
                    IdentityError::SocialFailed("popup blocked by the browser".to_owned())
                })?;

            // The callback page drops its result into localStorage; poll
            // until it shows up or the user closes the popup.
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(250)).await;

                if let Some(payload) = browser::take_handoff() {
                    let _ = popup.close();
                    let principal: PrincipalResponse = serde_json::from_str(&payload)
                        .map_err(|e| IdentityError::SocialFailed(e.to_string()))?;
                    let identity = principal.into_identity();
                    browser::persist(&identity);
                    watch::notify(Some(&identity));
                    return Ok(identity);
                }

                if popup.closed().unwrap_or(true) {
                    return Err(IdentityError::SocialCancelled);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = provider;
            Err(IdentityError::Network("not available on server".to_owned()))
        }
    }

    async fn update_profile(
        &self,
        identity: &Identity,
        name: &str,
        photo_url: Option<&str>,
    ) -> Result<Identity, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = browser::post_json(
                "/accounts/update",
                &serde_json::json!({
                    "idToken": identity.id_token,
                    "displayName": name,
                    "photoUrl": photo_url,
                }),
            )
            .await?;
            if !resp.ok() {
                let text = resp.text().await.unwrap_or_default();
                return Err(error_from_body(&text));
            }
            let mut updated = identity.clone();
            updated.display_name = name.to_owned();
            updated.photo_url = photo_url.map(str::to_owned);
            browser::persist(&updated);
            Ok(updated)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identity, name, photo_url);
            Err(IdentityError::Network("not available on server".to_owned()))
        }
    }

    async fn delete_account(&self, identity: &Identity) -> Result<(), IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = browser::post_json(
                "/accounts/delete",
                &serde_json::json!({ "idToken": identity.id_token }),
            )
            .await?;
            browser::clear_persisted();
            watch::notify(None);
            if resp.ok() {
                Ok(())
            } else {
                let text = resp.text().await.unwrap_or_default();
                Err(error_from_body(&text))
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = identity;
            Err(IdentityError::Network("not available on server".to_owned()))
        }
    }

    async fn sign_out(&self) {
        #[cfg(feature = "hydrate")]
        {
            // Best-effort revoke; the local session is gone either way.
            if let Some(creds) = browser::load_persisted() {
                let result = browser::post_json(
                    "/accounts/sign-out",
                    &serde_json::json!({ "refreshToken": creds.refresh_token }),
                )
                .await;
                if let Err(e) = result {
                    leptos::logging::warn!("provider sign-out failed: {e}");
                }
            }
            browser::clear_persisted();
            watch::notify(None);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            watch::notify(None);
        }
    }

    async fn fresh_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let creds = browser::load_persisted()?;
            browser::refresh(&creds.refresh_token).await.ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}
