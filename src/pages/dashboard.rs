//! Member dashboard: role-aware menu plus the profile widget.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::auth::store::AuthStore;
use crate::components::toast::push_toast;
use crate::state::auth::Role;
use crate::state::ui::{ToastKind, ToastState};

/// One entry in the dashboard side menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// Menu entries visible to a given role. Everyone gets the base entries;
/// trainers and admins get their sections on top.
#[must_use]
pub fn menu_for(role: Role) -> Vec<MenuItem> {
    let mut items = vec![
        MenuItem { label: "Overview", href: "/dashboard" },
        MenuItem { label: "Community", href: "/community" },
    ];
    match role {
        Role::Member => {}
        Role::Trainer => {
            items.push(MenuItem { label: "My classes", href: "/dashboard/trainer" });
        }
        Role::Admin => {
            items.push(MenuItem { label: "Admin console", href: "/dashboard/admin" });
        }
    }
    items
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();

    view! {
        <div class="dashboard-page">
            <aside class="dashboard-page__menu">
                {move || {
                    let role = auth.read().get().role().unwrap_or_default();
                    menu_for(role)
                        .into_iter()
                        .map(|item| view! { <A href=item.href>{item.label}</A> })
                        .collect::<Vec<_>>()
                }}
            </aside>

            <section class="dashboard-page__content">
                <h1>
                    {move || {
                        auth.read()
                            .get()
                            .session()
                            .map(|s| format!("Welcome back, {}", s.identity.display_name))
                            .unwrap_or_default()
                    }}
                </h1>
                <span class="dashboard-page__role">
                    {move || auth.read().get().role().map(Role::label).unwrap_or_default()}
                </span>
                <ProfileWidget/>
            </section>
        </div>
    }
}

/// Editable display profile. Saves through the auth store so the session
/// identity is updated in place.
#[component]
fn ProfileWidget() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let current = auth.read().get_untracked();
    let (initial_name, initial_photo) = current
        .session()
        .map(|s| {
            (s.identity.display_name.clone(), s.identity.photo_url.clone().unwrap_or_default())
        })
        .unwrap_or_default();

    let name = RwSignal::new(initial_name);
    let photo_url = RwSignal::new(initial_photo);
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            let name = name.get();
            let photo = photo_url.get();
            leptos::task::spawn_local(async move {
                let photo = if photo.trim().is_empty() { None } else { Some(photo.as_str()) };
                let result = auth.update_user(&name, photo).await;
                busy.set(false);
                match result {
                    Ok(()) => push_toast(toasts, ToastKind::Success, "Profile updated."),
                    Err(e) => push_toast(toasts, ToastKind::Error, e.user_message()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, toasts);
        }
    };

    view! {
        <form class="profile-widget" on:submit=submit>
            <h2>"Profile"</h2>
            <label>
                "Display name"
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Photo URL"
                <input
                    type="url"
                    prop:value=move || photo_url.get()
                    on:input=move |ev| photo_url.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}
