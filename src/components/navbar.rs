//! Top navigation bar: brand, section links, theme toggle, auth section.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::auth::store::AuthStore;
use crate::state::auth::AuthPhase;
use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        ui.update(|u| u.theme = theme::toggle(u.theme));
    };

    let on_toggle_nav = move |_| ui.update(|u| u.nav_open = !u.nav_open);

    view! {
        <header class="navbar">
            <A attr:class="navbar__brand" href="/">
                "FitPulse"
            </A>

            <button class="navbar__burger" on:click=on_toggle_nav aria-label="Toggle navigation">
                <span></span>
                <span></span>
                <span></span>
            </button>

            <nav class=move || {
                if ui.get().nav_open { "navbar__links navbar__links--open" } else { "navbar__links" }
            }>
                <A href="/classes">"Classes"</A>
                <A href="/trainers">"Trainers"</A>
                <A href="/community">"Community"</A>
            </nav>

            <div class="navbar__actions">
                <button class="navbar__theme" on:click=on_toggle_theme aria-label="Toggle theme">
                    {move || if ui.get().theme == crate::state::ui::Theme::Dark { "☀" } else { "☾" }}
                </button>
                <AuthSection/>
            </div>
        </header>
    }
}

/// Sign-in links, or the signed-in principal with a sign-out button. Shows
/// a placeholder while the session is settling, never a premature
/// "Sign in" flash.
#[component]
fn AuthSection() -> impl IntoView {
    let auth = expect_context::<AuthStore>();

    view! {
        {move || match auth.read().get().phase() {
            AuthPhase::Uninitialized | AuthPhase::Loading => view! {
                <span class="navbar__auth-skeleton" aria-busy="true"></span>
            }
                .into_any(),
            AuthPhase::Anonymous => view! {
                <span class="navbar__auth">
                    <A href="/login">"Sign in"</A>
                    <A attr:class="navbar__register" href="/register">
                        "Join now"
                    </A>
                </span>
            }
                .into_any(),
            AuthPhase::Authenticated(_) => {
                let state = auth.read().get();
                let (name, photo) = state
                    .session()
                    .map(|s| (s.identity.display_name.clone(), s.identity.photo_url.clone()))
                    .unwrap_or_default();
                view! {
                    <span class="navbar__auth">
                        {photo
                            .map(|url| view! { <img class="navbar__avatar" src=url alt=name.clone()/> })}
                        <A href="/dashboard">"Dashboard"</A>
                        <button
                            class="navbar__signout"
                            on:click=move |_| {
                                #[cfg(feature = "hydrate")]
                                leptos::task::spawn_local(async move {
                                    auth.log_out().await;
                                });
                            }
                        >
                            "Sign out"
                        </button>
                    </span>
                }
                    .into_any()
            }
        }}
    }
}
