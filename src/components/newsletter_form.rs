//! Newsletter signup form.

use leptos::prelude::*;

use crate::net::types::NewsletterSignup;
use crate::state::ui::{ToastKind, ToastState};

use super::toast::push_toast;

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let signup = NewsletterSignup { name: name.get(), email: email.get() };
        if signup.email.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::subscribe_newsletter(&signup).await;
                busy.set(false);
                let kind = match outcome {
                    crate::net::types::SubscribeOutcome::Subscribed => ToastKind::Success,
                    crate::net::types::SubscribeOutcome::AlreadySubscribed => ToastKind::Info,
                    crate::net::types::SubscribeOutcome::Failed => ToastKind::Error,
                };
                push_toast(toasts, kind, outcome.message());
                if outcome == crate::net::types::SubscribeOutcome::Subscribed {
                    name.set(String::new());
                    email.set(String::new());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (signup, toasts);
        }
    };

    view! {
        <form class="newsletter-form" on:submit=on_submit>
            <h3>"Stay in the loop"</h3>
            <input
                type="text"
                placeholder="Your name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                type="email"
                placeholder="Email address"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                {move || if busy.get() { "Subscribing..." } else { "Subscribe" }}
            </button>
        </form>
    }
}
