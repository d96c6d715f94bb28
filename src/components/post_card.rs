//! Forum post card with vote buttons.

use leptos::prelude::*;

use crate::net::types::{CommunityPost, VoteDirection};
use crate::state::auth::Role;
use crate::state::community::score;

#[component]
pub fn PostCard(
    post: CommunityPost,
    standing: Option<VoteDirection>,
    on_vote: Callback<VoteDirection>,
) -> impl IntoView {
    let net = score(&post);

    let badge = match post.author_role {
        Role::Admin => Some(("post-card__badge post-card__badge--admin", "Admin")),
        Role::Trainer => Some(("post-card__badge post-card__badge--trainer", "Trainer")),
        Role::Member => None,
    };

    view! {
        <article class="post-card">
            <div class="post-card__votes">
                <button
                    class=move || {
                        if standing == Some(VoteDirection::Up) {
                            "post-card__vote post-card__vote--active"
                        } else {
                            "post-card__vote"
                        }
                    }
                    aria-label="Upvote"
                    on:click=move |_| on_vote.run(VoteDirection::Up)
                >
                    "▲"
                </button>
                <span class="post-card__score">{net}</span>
                <button
                    class=move || {
                        if standing == Some(VoteDirection::Down) {
                            "post-card__vote post-card__vote--active"
                        } else {
                            "post-card__vote"
                        }
                    }
                    aria-label="Downvote"
                    on:click=move |_| on_vote.run(VoteDirection::Down)
                >
                    "▼"
                </button>
            </div>
            <div class="post-card__body">
                <header class="post-card__header">
                    <h3>{post.title.clone()}</h3>
                    {badge.map(|(class, label)| view! { <span class=class>{label}</span> })}
                </header>
                <p class="post-card__excerpt">{post.body.clone()}</p>
                <footer class="post-card__meta">
                    <span>{post.author_name.clone()}</span>
                    <span class="post-card__category">{post.category.clone()}</span>
                    <span>{post.created_at.clone()}</span>
                </footer>
            </div>
        </article>
    }
}
