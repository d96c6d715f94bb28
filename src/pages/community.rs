//! Community forum page with optimistic voting.

use leptos::prelude::*;

use crate::auth::store::AuthStore;
use crate::components::post_card::PostCard;
use crate::components::toast::push_toast;
use crate::net::types::{CommunityPost, VoteDirection};
use crate::state::community::apply_vote;
use crate::state::ui::{ToastKind, ToastState};

/// A post plus the signed-in user's standing vote on it.
#[derive(Clone, Debug, PartialEq)]
struct VotablePost {
    post: CommunityPost,
    standing: Option<VoteDirection>,
}

#[component]
pub fn CommunityPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let posts: RwSignal<Vec<VotablePost>> = RwSignal::new(Vec::new());
    let loaded = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(fetched) = crate::net::api::fetch_community().await {
            posts.set(
                fetched
                    .into_iter()
                    .map(|post| VotablePost { post, standing: None })
                    .collect(),
            );
        }
        loaded.set(true);
    });

    let on_vote = move |post_id: String, direction: VoteDirection| {
        // Voting requires a settled session; the backend checks the cookie,
        // we check up front for a friendlier message.
        let signed_in = auth.read().with(|s| !s.loading() && s.session().is_some());
        if !signed_in {
            push_toast(toasts, ToastKind::Info, "Sign in to vote on posts.");
            return;
        }

        // Optimistic count update; rolled back if the backend rejects it.
        let mut previous: Option<VoteDirection> = None;
        posts.update(|list| {
            if let Some(entry) = list.iter_mut().find(|e| e.post.id == post_id) {
                previous = entry.standing;
                entry.standing = apply_vote(&mut entry.post, direction, entry.standing);
            }
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if !crate::net::api::vote_post(&post_id, direction).await {
                posts.update(|list| {
                    if let Some(entry) = list.iter_mut().find(|e| e.post.id == post_id) {
                        entry.standing = apply_vote(&mut entry.post, direction, entry.standing);
                        // Restore a switched vote as well.
                        if let Some(prev) = previous {
                            if prev != direction {
                                entry.standing = apply_vote(&mut entry.post, prev, entry.standing);
                            }
                        }
                    }
                });
                push_toast(toasts, ToastKind::Error, "Vote failed. Please try again.");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = previous;
        }
    };

    view! {
        <div class="community-page">
            <h1>"Community"</h1>
            {move || {
                if !loaded.get() {
                    view! { <p>"Loading posts..."</p> }.into_any()
                } else if posts.get().is_empty() {
                    view! { <p class="community-page__empty">"No posts yet."</p> }.into_any()
                } else {
                    view! {
                        <div class="community-page__list">
                            {posts
                                .get()
                                .into_iter()
                                .map(|entry| {
                                    let id = entry.post.id.clone();
                                    view! {
                                        <PostCard
                                            post=entry.post
                                            standing=entry.standing
                                            on_vote=Callback::new(move |dir| on_vote(id.clone(), dir))
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
