//! Forum voting state.
//!
//! Votes are applied optimistically: the count moves as soon as the button
//! is clicked, and is rolled back if the backend rejects the vote. One vote
//! per user per post; clicking the same direction again retracts it,
//! clicking the other direction switches it.

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

use crate::net::types::{CommunityPost, VoteDirection};

/// Apply a vote click to a post's counters.
///
/// `previous` is the user's standing vote on this post, if any. Returns the
/// user's new standing vote (`None` when the click retracted it).
pub fn apply_vote(
    post: &mut CommunityPost,
    click: VoteDirection,
    previous: Option<VoteDirection>,
) -> Option<VoteDirection> {
    // Undo the standing vote first.
    match previous {
        Some(VoteDirection::Up) => post.up_votes -= 1,
        Some(VoteDirection::Down) => post.down_votes -= 1,
        None => {}
    }

    if previous == Some(click) {
        return None;
    }

    match click {
        VoteDirection::Up => post.up_votes += 1,
        VoteDirection::Down => post.down_votes += 1,
    }
    Some(click)
}

/// Net score shown on the post card.
#[must_use]
pub fn score(post: &CommunityPost) -> i64 {
    post.up_votes - post.down_votes
}
