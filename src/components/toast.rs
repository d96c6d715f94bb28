//! Transient notification stack.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, ToastState};

/// Auto-dismiss delay for toasts.
#[cfg(feature = "hydrate")]
const TOAST_TTL_MS: u64 = 4000;

/// Queue a toast on the shared stack and schedule its dismissal.
pub fn push_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let id = toasts.try_update(|t| t.push(kind, message)).unwrap_or(0);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Renders the queued toasts in a fixed corner stack.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts()
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=format!("toast {}", toast.kind.css_class())>
                                <span class="toast__message">{toast.message.clone()}</span>
                                <button
                                    class="toast__close"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
