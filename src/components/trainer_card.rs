//! Card for a trainer profile.

use leptos::prelude::*;

use crate::net::types::Trainer;

#[component]
pub fn TrainerCard(trainer: Trainer) -> impl IntoView {
    view! {
        <article class="trainer-card">
            {trainer
                .photo_url
                .clone()
                .map(|url| view! { <img class="trainer-card__photo" src=url alt=trainer.name.clone()/> })}
            <div class="trainer-card__body">
                <h3>{trainer.name.clone()}</h3>
                <span class="trainer-card__experience">
                    {format!("{} years of experience", trainer.years_of_experience)}
                </span>
                <div class="trainer-card__expertise">
                    {trainer
                        .expertise
                        .iter()
                        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                        .collect::<Vec<_>>()}
                </div>
                <div class="trainer-card__slots">
                    <h4>"Available slots"</h4>
                    {if trainer.available_slots.is_empty() {
                        view! { <p class="trainer-card__no-slots">"Fully booked"</p> }.into_any()
                    } else {
                        view! {
                            <ul>
                                {trainer
                                    .available_slots
                                    .iter()
                                    .map(|slot| view! { <li>{slot.clone()}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }}
                </div>
            </div>
        </article>
    }
}
