//! Sign-in page: credential form plus social sign-in buttons.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::identity::SocialProvider;
use crate::auth::store::AuthStore;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error: RwSignal<Option<&'static str>> = RwSignal::new(None);
    let busy = RwSignal::new(false);

    let submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            error.set(None);

            #[cfg(feature = "hydrate")]
            {
                busy.set(true);
                let navigate = navigate.clone();
                let email = email.get();
                let password = password.get();
                leptos::task::spawn_local(async move {
                    let result = auth.sign_in(&email, &password).await;
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
        }
    };

    let social = move |provider: SocialProvider| {
        let navigate = navigate.clone();
        move |_| {
            error.set(None);

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match auth.sign_in_with_provider(provider).await {
                        Ok(()) => navigate("/", NavigateOptions::default()),
                        Err(e) => error.set(Some(e.user_message())),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&navigate, auth, provider);
            }
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Welcome back"</h1>

            <form class="auth-form" on:submit=submit>
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
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <div class="auth-page__social">
                <button class="btn btn--google" on:click=social(SocialProvider::Google)>
                    "Continue with Google"
                </button>
                <button class="btn btn--github" on:click=social(SocialProvider::Github)>
                    "Continue with GitHub"
                </button>
            </div>

            <p class="auth-page__switch">
                "New to FitPulse? " <A href="/register">"Create an account"</A>
            </p>
        </div>
    }
}
