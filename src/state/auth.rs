//! Authentication session state and its transition rules.
//!
//! DESIGN
//! ======
//! `AuthState` is the single process-wide holder of the current session.
//! Only the auth store (`crate::auth::store`) writes it; everything else
//! reads a snapshot through the shared `RwSignal`. Writes are whole-value
//! replacements of `session`, so readers observe either the pre- or
//! post-transition session, never a partial update.
//!
//! Every transition is ticketed with a monotonic `epoch`. Async completions
//! must present their ticket when settling; a completion whose ticket is no
//! longer current (another transition started in the meantime, or the user
//! signed out) is discarded rather than resurrecting a stale session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Coarse authorization tier gating dashboard views and navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Trainer,
    Admin,
}

impl Role {
    /// Parse a backend role string. Anything unrecognized falls back to
    /// `Member`: least privilege rather than a hard failure.
    #[must_use]
    pub fn parse_or_member(s: &str) -> Self {
        match s.trim() {
            "trainer" => Self::Trainer,
            "admin" => Self::Admin,
            _ => Self::Member,
        }
    }

    /// Display label used in menus and badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Trainer => "Trainer",
            Self::Admin => "Admin",
        }
    }
}

/// Verified principal handed to us by the external identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub photo_url: Option<String>,
    /// Short-lived bearer token; refreshed per request, never reused across
    /// requests (see `IdentityPort::fresh_token`).
    pub id_token: String,
    pub refresh_token: String,
}

/// An authenticated session: identity plus the backend-resolved role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
    pub role: Role,
}

/// Observable phase of the auth machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    /// No provider callback has fired yet (page just loaded).
    Uninitialized,
    /// An identity change or role fetch is in flight.
    Loading,
    Authenticated(Role),
    Anonymous,
}

/// Process-wide auth state. See module docs for the write discipline.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    session: Option<Session>,
    loading: bool,
    initialized: bool,
    epoch: u64,
}

impl AuthState {
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        if !self.initialized {
            return AuthPhase::Uninitialized;
        }
        if self.loading {
            return AuthPhase::Loading;
        }
        match &self.session {
            Some(s) => AuthPhase::Authenticated(s.role),
            None => AuthPhase::Anonymous,
        }
    }

    /// Role of the settled session, if any. Views must not consult this
    /// while `loading()` is true; render a skeleton instead.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        if self.loading { None } else { self.session.as_ref().map(|s| s.role) }
    }

    /// Begin a transition (identity change notification, explicit sign-in or
    /// register). Returns the epoch ticket the eventual completion must
    /// present to `settle_*`.
    pub fn begin_transition(&mut self) -> u64 {
        self.initialized = true;
        self.loading = true;
        self.epoch += 1;
        self.epoch
    }

    /// Settle a transition with an authenticated session. Returns `false`
    /// (and writes nothing) if `epoch` is stale.
    pub fn settle_authenticated(&mut self, epoch: u64, session: Session) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.session = Some(session);
        self.loading = false;
        true
    }

    /// Settle a failed explicit action by restoring the session that was
    /// current before the transition began. A mistyped password on the
    /// login form must not sign out an already-authenticated user; the
    /// provider session and backend cookie are still intact, so the store
    /// has to keep reflecting them. Returns `false` if `epoch` is stale.
    pub fn settle_reverted(&mut self, epoch: u64, previous: Option<Session>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.session = previous;
        self.loading = false;
        true
    }

    /// Settle a transition with no principal. Returns `false` if stale.
    pub fn settle_anonymous(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.session = None;
        self.loading = false;
        true
    }

    /// Unconditional sign-out write. Also advances the epoch so any still
    /// in-flight sync sequence is invalidated and cannot resurrect the
    /// session it was resolving.
    pub fn force_anonymous(&mut self) {
        self.epoch += 1;
        self.session = None;
        self.loading = false;
        self.initialized = true;
    }

    /// Replace the identity of the current session in place (profile
    /// update), keeping the resolved role. Ignored when the incoming
    /// identity no longer belongs to the settled principal: a profile
    /// update that was in flight across a sign-out must not stamp the old
    /// identity onto whoever signed in next.
    pub fn replace_identity(&mut self, identity: Identity) {
        if !self.is_current_principal(&identity.email) {
            return;
        }
        if let Some(s) = &mut self.session {
            s.identity = identity;
        }
    }

    /// True when `email` belongs to the currently settled principal. Used
    /// by async continuations to check they are still writing for the
    /// current user.
    #[must_use]
    pub fn is_current_principal(&self, email: &str) -> bool {
        self.session.as_ref().is_some_and(|s| s.identity.email == email)
    }
}
