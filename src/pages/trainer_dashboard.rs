//! Trainer dashboard: the trainer's classes and open slots.

use leptos::prelude::*;

use crate::auth::store::AuthStore;
use crate::components::class_card::ClassCard;

#[component]
pub fn TrainerDashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();

    // Classes this trainer appears on, by display name match against the
    // embedded trainer refs.
    let classes = LocalResource::new(|| async {
        crate::net::api::fetch_classes().await.unwrap_or_default()
    });

    view! {
        <div class="trainer-dashboard">
            <h1>"My classes"</h1>
            <Suspense fallback=move || view! { <p>"Loading classes..."</p> }>
                {move || {
                    let me = auth
                        .read()
                        .get()
                        .session()
                        .map(|s| s.identity.display_name.clone())
                        .unwrap_or_default();
                    classes
                        .get()
                        .map(|list| {
                            let mine: Vec<_> = list
                                .into_iter()
                                .filter(|c| c.trainers.iter().any(|t| t.name == me))
                                .collect();
                            if mine.is_empty() {
                                view! {
                                    <p class="trainer-dashboard__empty">
                                        "You are not assigned to any classes yet."
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="trainer-dashboard__grid">
                                        {mine
                                            .into_iter()
                                            .map(|c| view! { <ClassCard class=c/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
