//! Trainer directory, accepted trainers only.

use leptos::prelude::*;

use crate::components::trainer_card::TrainerCard;

#[component]
pub fn TrainersPage() -> impl IntoView {
    let trainers = LocalResource::new(|| async {
        crate::net::api::fetch_trainers(Some("accepted")).await.unwrap_or_default()
    });

    view! {
        <div class="trainers-page">
            <h1>"Our trainers"</h1>
            <Suspense fallback=move || view! { <p>"Loading trainers..."</p> }>
                {move || {
                    trainers
                        .get()
                        .map(|list| {
                            view! {
                                <div class="trainers-page__grid">
                                    {list
                                        .into_iter()
                                        .map(|t| view! { <TrainerCard trainer=t/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
