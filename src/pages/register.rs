//! Account creation page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::store::AuthStore;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let photo_url = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error: RwSignal<Option<&'static str>> = RwSignal::new(None);
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            let navigate = navigate.clone();
            let name = name.get();
            let photo = photo_url.get();
            let email = email.get();
            let password = password.get();
            leptos::task::spawn_local(async move {
                let photo = if photo.trim().is_empty() { None } else { Some(photo.as_str()) };
                let result = auth.register(&name, &email, &password, photo).await;
                busy.set(false);
                match result {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, auth);
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Join FitPulse"</h1>

            <form class="auth-form" on:submit=submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Photo URL (optional)"
                    <input
                        type="url"
                        prop:value=move || photo_url.get()
                        on:input=move |ev| photo_url.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                {move || error.get().map(|msg| view! { <p class="auth-form__error">{msg}</p> })}

                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Create account" }}
                </button>
            </form>

            <p class="auth-page__switch">
                "Already a member? " <A href="/login">"Sign in"</A>
            </p>
        </div>
    }
}
