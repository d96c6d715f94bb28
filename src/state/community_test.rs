use super::*;
use crate::state::auth::Role;

fn post(up: i64, down: i64) -> CommunityPost {
    CommunityPost {
        id: "p-1".to_owned(),
        title: "Leg day tips".to_owned(),
        body: String::new(),
        author_name: "Sam".to_owned(),
        author_role: Role::Member,
        category: "training".to_owned(),
        up_votes: up,
        down_votes: down,
        created_at: String::new(),
    }
}

#[test]
fn first_upvote_increments() {
    let mut p = post(3, 1);
    let standing = apply_vote(&mut p, VoteDirection::Up, None);
    assert_eq!(standing, Some(VoteDirection::Up));
    assert_eq!(p.up_votes, 4);
    assert_eq!(p.down_votes, 1);
}

#[test]
fn repeated_click_retracts_the_vote() {
    let mut p = post(3, 1);
    let standing = apply_vote(&mut p, VoteDirection::Up, Some(VoteDirection::Up));
    assert_eq!(standing, None);
    assert_eq!(p.up_votes, 2);
}

#[test]
fn opposite_click_switches_the_vote() {
    let mut p = post(3, 1);
    let standing = apply_vote(&mut p, VoteDirection::Down, Some(VoteDirection::Up));
    assert_eq!(standing, Some(VoteDirection::Down));
    assert_eq!(p.up_votes, 2);
    assert_eq!(p.down_votes, 2);
}

#[test]
fn score_is_net_votes() {
    assert_eq!(score(&post(7, 2)), 5);
    assert_eq!(score(&post(0, 3)), -3);
}

#[test]
fn retract_then_revote_round_trips() {
    let mut p = post(5, 5);
    let s1 = apply_vote(&mut p, VoteDirection::Down, None);
    let s2 = apply_vote(&mut p, VoteDirection::Down, s1);
    let s3 = apply_vote(&mut p, VoteDirection::Down, s2);
    assert_eq!(s3, Some(VoteDirection::Down));
    assert_eq!(p.up_votes, 5);
    assert_eq!(p.down_votes, 6);
}
