use super::*;
use crate::state::auth::{Identity, Session};

fn settled(role: Option<Role>) -> AuthState {
    let mut state = AuthState::default();
    let epoch = state.begin_transition();
    match role {
        Some(role) => {
            let session = Session {
                identity: Identity {
                    uid: "u-1".to_owned(),
                    email: "u@x.com".to_owned(),
                    display_name: "U".to_owned(),
                    photo_url: None,
                    id_token: "tok".to_owned(),
                    refresh_token: "refresh".to_owned(),
                },
                role,
            };
            state.settle_authenticated(epoch, session);
        }
        None => {
            state.settle_anonymous(epoch);
        }
    }
    state
}

#[test]
fn unsettled_states_render_skeleton_not_redirect() {
    let uninitialized = AuthState::default();
    assert_eq!(
        evaluate(&uninitialized, Some(Role::Member), "/dashboard"),
        GuardDecision::Pending
    );

    let mut loading = AuthState::default();
    loading.begin_transition();
    assert_eq!(evaluate(&loading, None, "/dashboard"), GuardDecision::Pending);
}

#[test]
fn anonymous_is_redirected_with_return_path() {
    let decision = evaluate(&settled(None), Some(Role::Member), "/dashboard");
    assert_eq!(
        decision,
        GuardDecision::Redirect("/forbidden?from=%2Fdashboard".to_owned())
    );
}

#[test]
fn wrong_role_is_redirected() {
    // A trainer on a member-only path is forbidden; roles match exactly.
    let decision = evaluate(&settled(Some(Role::Trainer)), Some(Role::Member), "/dashboard");
    assert!(matches!(decision, GuardDecision::Redirect(_)));

    let decision = evaluate(&settled(Some(Role::Admin)), Some(Role::Trainer), "/dashboard/trainer");
    assert!(matches!(decision, GuardDecision::Redirect(_)));
}

#[test]
fn matching_role_is_allowed() {
    assert_eq!(
        evaluate(&settled(Some(Role::Member)), Some(Role::Member), "/dashboard"),
        GuardDecision::Allow
    );
    assert_eq!(
        evaluate(&settled(Some(Role::Admin)), Some(Role::Admin), "/dashboard/admin"),
        GuardDecision::Allow
    );
}

#[test]
fn any_authenticated_session_passes_roleless_guard() {
    assert_eq!(evaluate(&settled(Some(Role::Trainer)), None, "/dashboard"), GuardDecision::Allow);
    assert!(matches!(evaluate(&settled(None), None, "/dashboard"), GuardDecision::Redirect(_)));
}

#[test]
fn return_path_is_percent_encoded() {
    assert_eq!(
        forbidden_redirect("/dashboard/admin?tab=users"),
        "/forbidden?from=%2Fdashboard%2Fadmin%3Ftab%3Dusers"
    );
}
