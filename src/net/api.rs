//! REST API client for the backend service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with credentials
//! enabled so the HTTP-only session cookie travels with every request.
//! Server-side (SSR): stubs returning `None`/errors since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Domain fetchers return `Option`/outcome enums instead of raw errors so a
//! failed listing degrades to an empty page, not a crash. Auth-critical
//! calls live on `RestBackend` (the `BackendPort` implementation) and
//! return typed `BackendError`s for the bridge to act on.

#![allow(clippy::unused_async)]

use crate::auth::bridge::{BackendPort, NewUser};
use crate::auth::error::BackendError;
use crate::state::auth::Role;

use super::types::{
    CommunityPost, FitnessClass, NewsletterSignup, SubscribeOutcome, Trainer, UnsubscribeOutcome,
    VoteDirection,
};

#[cfg(feature = "hydrate")]
const API_BASE: &str = match option_env!("FITPULSE_API_BASE") {
    Some(base) => base,
    None => "/api",
};

#[cfg(feature = "hydrate")]
fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(feature = "hydrate")]
mod http {
    use super::{BackendError, api_url};

    fn with_cookies(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        req.credentials(web_sys::RequestCredentials::Include)
    }

    pub(super) async fn get(path: &str) -> Result<gloo_net::http::Response, BackendError> {
        with_cookies(gloo_net::http::Request::get(&api_url(path)))
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))
    }

    pub(super) async fn send_json(
        builder: gloo_net::http::RequestBuilder,
        body: &impl serde::Serialize,
    ) -> Result<gloo_net::http::Response, BackendError> {
        with_cookies(builder)
            .json(body)
            .map_err(|e| BackendError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))
    }

    pub(super) async fn post_json(
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<gloo_net::http::Response, BackendError> {
        send_json(gloo_net::http::Request::post(&api_url(path)), body).await
    }

    pub(super) fn status_error(status: u16) -> BackendError {
        match status {
            404 => BackendError::NotFound,
            409 => BackendError::Conflict,
            s => BackendError::Rejected(format!("status {s}")),
        }
    }
}

/// Backend REST implementation of the auth bridge port.
#[derive(Clone, Copy, Debug, Default)]
pub struct RestBackend;

impl BackendPort for RestBackend {
    async fn user_exists(&self, email: &str) -> Result<bool, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = http::get(&format!("/users/{email}")).await?;
            match resp.status() {
                200 => Ok(true),
                404 => Ok(false),
                s => Err(http::status_error(s)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
            Err(BackendError::Network("not available on server".to_owned()))
        }
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = http::post_json("/users", user).await?;
            match resp.status() {
                200 | 201 => Ok(()),
                s => Err(http::status_error(s)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
            Err(BackendError::Network("not available on server".to_owned()))
        }
    }

    async fn touch_last_sign_in(&self, email: &str, when: &str) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({ "email": email, "lastSignInTime": when });
            let resp = http::send_json(
                gloo_net::http::Request::patch(&api_url("/users")),
                &body,
            )
            .await?;
            if resp.ok() { Ok(()) } else { Err(http::status_error(resp.status())) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, when);
            Err(BackendError::Network("not available on server".to_owned()))
        }
    }

    async fn login(&self, email: &str) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = http::post_json("/login", &serde_json::json!({ "email": email })).await?;
            if resp.ok() { Ok(()) } else { Err(http::status_error(resp.status())) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
            Err(BackendError::Network("not available on server".to_owned()))
        }
    }

    async fn logout(&self) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = http::post_json("/logout", &serde_json::json!({})).await?;
            if resp.ok() { Ok(()) } else { Err(http::status_error(resp.status())) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(BackendError::Network("not available on server".to_owned()))
        }
    }

    async fn fetch_role(&self, email: &str) -> Result<Role, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            #[derive(serde::Deserialize)]
            struct RoleResponse {
                role: String,
            }
            let resp = http::get(&format!("/users/role/{email}")).await?;
            if !resp.ok() {
                return Err(http::status_error(resp.status()));
            }
            let body: RoleResponse = resp
                .json()
                .await
                .map_err(|e| BackendError::Rejected(e.to_string()))?;
            Ok(Role::parse_or_member(&body.role))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
            Err(BackendError::Network("not available on server".to_owned()))
        }
    }
}

/// Fetch all classes from `GET /classes`. Returns `None` on any failure.
pub async fn fetch_classes() -> Option<Vec<FitnessClass>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::get("/classes").await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<FitnessClass>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch trainers, optionally filtered by status (`GET /trainers?status=`).
pub async fn fetch_trainers(status: Option<&str>) -> Option<Vec<Trainer>> {
    #[cfg(feature = "hydrate")]
    {
        let path = match status {
            Some(s) => format!("/trainers?status={s}"),
            None => "/trainers".to_owned(),
        };
        let resp = http::get(&path).await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Trainer>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = status;
        None
    }
}

/// Fetch community forum posts from `GET /community`.
pub async fn fetch_community() -> Option<Vec<CommunityPost>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::get("/community").await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<CommunityPost>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Cast a forum vote via `POST /community/vote`. Returns `false` on failure
/// so the caller can undo its optimistic count update.
pub async fn vote_post(post_id: &str, direction: VoteDirection) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "postId": post_id, "direction": direction });
        match http::post_json("/community/vote", &body).await {
            Ok(resp) => resp.ok(),
            Err(_) => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post_id, direction);
        false
    }
}

/// Subscribe an address to the newsletter.
pub async fn subscribe_newsletter(signup: &NewsletterSignup) -> SubscribeOutcome {
    #[cfg(feature = "hydrate")]
    {
        match http::post_json("/newsletter/subscribe", signup).await {
            Ok(resp) => SubscribeOutcome::from_status(resp.status()),
            Err(_) => SubscribeOutcome::Failed,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = signup;
        SubscribeOutcome::Failed
    }
}

/// Remove an address from the newsletter.
pub async fn unsubscribe_newsletter(email: &str) -> UnsubscribeOutcome {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email });
        match http::post_json("/newsletter/unsubscribe", &body).await {
            Ok(resp) => UnsubscribeOutcome::from_status(resp.status()),
            Err(_) => UnsubscribeOutcome::Failed,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        UnsubscribeOutcome::Failed
    }
}
