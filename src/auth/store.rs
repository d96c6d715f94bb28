//! Process-wide auth store.
//!
//! Owns the `RwSignal<AuthState>` and is its only writer. Components get
//! the store from context and hold a read-only snapshot plus these action
//! methods, never a raw setter.
//!
//! The passive provider watch and the explicit actions both run the bridge
//! sync sequence; the epoch ticket in `AuthState` makes whichever
//! completion lands last win, and discards completions for principals that
//! have since signed out.

use leptos::prelude::*;

use crate::net::api::RestBackend;
use crate::state::auth::AuthState;

use super::bridge;
use super::error::AuthFlowError;
use super::identity::{self, IdentityPort, RestIdentityProvider, SocialProvider};

#[derive(Clone, Copy)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStore {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()) }
    }

    /// Read-only view of the session state for components and guards.
    #[must_use]
    pub fn read(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Wire the provider watch and kick off session restoration. Call once
    /// from the root component.
    pub fn init(&self) {
        let store = *self;
        identity::watch::subscribe(move |principal| store.on_principal_change(principal));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async {
            RestIdentityProvider.restore_session().await;
        });
    }

    /// Passive path: the provider's notion of "current principal" changed
    /// (sign-in, sign-out, restoration). Re-runs the full sync sequence.
    fn on_principal_change(&self, principal: Option<crate::state::auth::Identity>) {
        let epoch = self.state.try_update(AuthState::begin_transition).unwrap_or(0);
        match principal {
            None => {
                self.state.update(|s| {
                    s.settle_anonymous(epoch);
                });
            }
            Some(identity) => {
                #[cfg(feature = "hydrate")]
                {
                    let state = self.state;
                    leptos::task::spawn_local(async move {
                        let session = bridge::sync_session(&RestBackend, identity).await;
                        state.update(|s| {
                            s.settle_authenticated(epoch, session);
                        });
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = identity;
                    self.state.update(|s| {
                        s.settle_anonymous(epoch);
                    });
                }
            }
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthFlowError> {
        // A failed attempt restores whatever session was current before;
        // the provider session it belongs to is still valid.
        let prior = self.state.with_untracked(|s| s.session().cloned());
        let epoch = self.state.try_update(AuthState::begin_transition).unwrap_or(0);
        match bridge::run_sign_in(&RestIdentityProvider, &RestBackend, email, password).await {
            Ok(session) => {
                self.state.update(|s| {
                    s.settle_authenticated(epoch, session);
                });
                Ok(())
            }
            Err(e) => {
                self.state.update(|s| {
                    s.settle_reverted(epoch, prior);
                });
                Err(e)
            }
        }
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        photo_url: Option<&str>,
    ) -> Result<(), AuthFlowError> {
        let prior = self.state.with_untracked(|s| s.session().cloned());
        let epoch = self.state.try_update(AuthState::begin_transition).unwrap_or(0);
        let result = bridge::run_register(
            &RestIdentityProvider,
            &RestBackend,
            name,
            email,
            password,
            photo_url,
        )
        .await;
        match result {
            Ok(session) => {
                self.state.update(|s| {
                    s.settle_authenticated(epoch, session);
                });
                Ok(())
            }
            Err(e) => {
                self.state.update(|s| {
                    s.settle_reverted(epoch, prior);
                });
                Err(e)
            }
        }
    }

    pub async fn sign_in_with_provider(
        &self,
        provider: SocialProvider,
    ) -> Result<(), AuthFlowError> {
        let prior = self.state.with_untracked(|s| s.session().cloned());
        let epoch = self.state.try_update(AuthState::begin_transition).unwrap_or(0);
        match bridge::run_social_sign_in(&RestIdentityProvider, &RestBackend, provider).await {
            Ok(session) => {
                self.state.update(|s| {
                    s.settle_authenticated(epoch, session);
                });
                Ok(())
            }
            Err(e) => {
                self.state.update(|s| {
                    s.settle_reverted(epoch, prior);
                });
                Err(e)
            }
        }
    }

    /// Sign out. Always lands in `Anonymous`, even when the backend or the
    /// provider is unreachable.
    pub async fn log_out(&self) {
        bridge::run_log_out(&RestIdentityProvider, &RestBackend).await;
        self.state.update(AuthState::force_anonymous);
    }

    /// Update the current principal's display profile in place.
    pub async fn update_user(
        &self,
        name: &str,
        photo_url: Option<&str>,
    ) -> Result<(), AuthFlowError> {
        let current = self
            .state
            .with_untracked(|s| s.session().map(|sess| sess.identity.clone()));
        let Some(identity) = current else {
            return Ok(());
        };
        let updated = RestIdentityProvider
            .update_profile(&identity, name, photo_url)
            .await?;
        self.state.update(|s| s.replace_identity(updated));
        Ok(())
    }
}
