//! Card for a single fitness class, with its deduplicated trainer strip.

use leptos::prelude::*;

use crate::net::types::FitnessClass;
use crate::state::catalog::dedup_trainers;

#[component]
pub fn ClassCard(class: FitnessClass) -> impl IntoView {
    let trainers = dedup_trainers(class.trainers.clone());

    view! {
        <article class="class-card">
            {class
                .image
                .clone()
                .map(|url| view! { <img class="class-card__image" src=url alt=class.name.clone()/> })}
            <div class="class-card__body">
                <h3>{class.name.clone()}</h3>
                <p class="class-card__description">{class.description.clone()}</p>
                <span class="class-card__bookings">
                    {format!("{} booked", class.booking_count)}
                </span>
                <div class="class-card__trainers">
                    {trainers
                        .into_iter()
                        .map(|t| match t.photo_url {
                            Some(url) => view! {
                                <img class="class-card__trainer" src=url alt=t.name.clone() title=t.name/>
                            }
                                .into_any(),
                            None => view! {
                                <span class="class-card__trainer class-card__trainer--initial" title=t.name.clone()>
                                    {t.name.chars().next().unwrap_or('?')}
                                </span>
                            }
                                .into_any(),
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </article>
    }
}
