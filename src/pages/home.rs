//! Marketing home page: hero, most-booked classes, newsletter signup.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::class_card::ClassCard;
use crate::components::newsletter_form::NewsletterForm;
use crate::state::catalog::featured_classes;

#[component]
pub fn HomePage() -> impl IntoView {
    let classes = LocalResource::new(|| async {
        crate::net::api::fetch_classes().await.unwrap_or_default()
    });

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Move with purpose"</h1>
                <p>"Classes, trainers, and a community that keeps you showing up."</p>
                <div class="hero__actions">
                    <A attr:class="btn btn--primary" href="/classes">
                        "Browse classes"
                    </A>
                    <A attr:class="btn" href="/trainers">
                        "Meet the trainers"
                    </A>
                </div>
            </section>

            <section class="home-page__featured">
                <h2>"Most booked this month"</h2>
                <Suspense fallback=move || view! { <p>"Loading classes..."</p> }>
                    {move || {
                        classes
                            .get()
                            .map(|list| {
                                view! {
                                    <div class="home-page__grid">
                                        {featured_classes(list)
                                            .into_iter()
                                            .map(|c| view! { <ClassCard class=c/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                    }}
                </Suspense>
            </section>

            <section class="home-page__newsletter">
                <NewsletterForm/>
            </section>
        </div>
    }
}
