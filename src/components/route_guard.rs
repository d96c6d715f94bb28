//! Navigation guard for role-restricted subtrees.
//!
//! CONTRACT
//! ========
//! While the auth store is still `Uninitialized`/`Loading` the guard renders
//! a neutral skeleton and never redirects; redirecting on a half-settled
//! session would bounce legitimate users on every page load. Once settled,
//! a missing or mismatched role redirects to the forbidden page with the
//! originally requested path attached (advisory only; the destination may
//! ignore it).

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use std::fmt::Write;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth::store::AuthStore;
use crate::state::auth::{AuthPhase, AuthState, Role};

pub const FORBIDDEN_PATH: &str = "/forbidden";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth not settled yet; render a skeleton, never redirect.
    Pending,
    Allow,
    Redirect(String),
}

/// Decide what to do with a navigation to a guarded path.
///
/// `required` of `None` means any authenticated session is enough. Roles
/// match exactly; there is no tier hierarchy (an admin does not pass a
/// trainer-only guard).
#[must_use]
pub fn evaluate(state: &AuthState, required: Option<Role>, requested: &str) -> GuardDecision {
    match state.phase() {
        AuthPhase::Uninitialized | AuthPhase::Loading => GuardDecision::Pending,
        AuthPhase::Anonymous => GuardDecision::Redirect(forbidden_redirect(requested)),
        AuthPhase::Authenticated(role) => match required {
            Some(need) if need != role => GuardDecision::Redirect(forbidden_redirect(requested)),
            _ => GuardDecision::Allow,
        },
    }
}

/// Forbidden location carrying the originally requested path for a future
/// authorized entry.
#[must_use]
pub fn forbidden_redirect(from: &str) -> String {
    format!("{FORBIDDEN_PATH}?from={}", encode_component(from))
}

/// Percent-encode a query component. Unreserved characters pass through.
fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            _ => {
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
    out
}

/// Gate children behind a role. Skeleton while auth settles, redirect on
/// mismatch, children otherwise.
#[component]
pub fn RequireRole(
    #[prop(optional)] role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let location = use_location();
    let decision =
        Memo::new(move |_| evaluate(&auth.read().get(), role, &location.pathname.get()));

    let navigate = use_navigate();
    Effect::new(move || {
        if let GuardDecision::Redirect(to) = decision.get() {
            navigate(&to, NavigateOptions::default());
        }
    });

    view! {
        {move || match decision.get() {
            GuardDecision::Pending => view! {
                <div class="guard-skeleton" aria-busy="true">
                    <div class="guard-skeleton__bar"></div>
                    <div class="guard-skeleton__bar"></div>
                </div>
            }
                .into_any(),
            GuardDecision::Allow => children().into_any(),
            GuardDecision::Redirect(_) => ().into_any(),
        }}
    }
}
