//! Class catalog page with name search, sorted by popularity.

use leptos::prelude::*;

use crate::components::class_card::ClassCard;
use crate::state::catalog::{filter_by_name, sort_by_bookings};

#[component]
pub fn ClassesPage() -> impl IntoView {
    let classes = LocalResource::new(|| async {
        crate::net::api::fetch_classes().await.unwrap_or_default()
    });
    let query = RwSignal::new(String::new());

    view! {
        <div class="classes-page">
            <header class="classes-page__header">
                <h1>"Classes"</h1>
                <input
                    class="classes-page__search"
                    type="search"
                    placeholder="Search classes"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </header>

            <Suspense fallback=move || view! { <p>"Loading classes..."</p> }>
                {move || {
                    classes
                        .get()
                        .map(|list| {
                            let visible = sort_by_bookings(filter_by_name(&list, &query.get()));
                            if visible.is_empty() {
                                view! { <p class="classes-page__empty">"No classes match."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="classes-page__grid">
                                        {visible
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
