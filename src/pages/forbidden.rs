//! Forbidden page: the route guards' redirect target.
//!
//! The `from` query parameter carries the path the user originally asked
//! for; it is advisory and shown only as a hint.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

#[component]
pub fn ForbiddenPage() -> impl IntoView {
    let query = use_query_map();
    let from = move || query.with(|q| q.get("from"));

    view! {
        <div class="forbidden-page">
            <h1>"403"</h1>
            <p>"You don't have access to this page."</p>
            {move || {
                from()
                    .map(|path| view! {
                        <p class="forbidden-page__hint">
                            "Requested: " <code>{path}</code>
                        </p>
                    })
            }}
            <div class="forbidden-page__actions">
                <A attr:class="btn btn--primary" href="/login">
                    "Sign in"
                </A>
                <A attr:class="btn" href="/">
                    "Back home"
                </A>
            </div>
        </div>
    }
}
