use super::*;

#[test]
fn class_listing_tolerates_missing_optional_fields() {
    let json = r#"{
        "_id": "c-1",
        "name": "Morning HIIT",
        "trainers": [{"id": "t-1", "name": "Sam"}]
    }"#;
    let class: FitnessClass = serde_json::from_str(json).expect("class");
    assert_eq!(class.id, "c-1");
    assert_eq!(class.booking_count, 0);
    assert!(class.image.is_none());
    assert_eq!(class.trainers.len(), 1);
}

#[test]
fn class_accepts_plain_id_field() {
    let json = r#"{"id": "c-2", "name": "Yoga", "bookingCount": 42}"#;
    let class: FitnessClass = serde_json::from_str(json).expect("class");
    assert_eq!(class.id, "c-2");
    assert_eq!(class.booking_count, 42);
}

#[test]
fn post_author_role_defaults_to_member() {
    let json = r#"{"_id": "p-1", "title": "Welcome"}"#;
    let post: CommunityPost = serde_json::from_str(json).expect("post");
    assert_eq!(post.author_role, Role::Member);
    assert_eq!(post.up_votes, 0);
}

#[test]
fn trainer_status_parses_lowercase() {
    let json = r#"{"_id": "t-1", "name": "Sam", "status": "accepted"}"#;
    let trainer: Trainer = serde_json::from_str(json).expect("trainer");
    assert_eq!(trainer.status, TrainerStatus::Accepted);
}

#[test]
fn subscribe_outcome_maps_conflict_and_success() {
    assert_eq!(SubscribeOutcome::from_status(201), SubscribeOutcome::Subscribed);
    assert_eq!(SubscribeOutcome::from_status(200), SubscribeOutcome::Subscribed);
    assert_eq!(SubscribeOutcome::from_status(409), SubscribeOutcome::AlreadySubscribed);
    assert_eq!(SubscribeOutcome::from_status(500), SubscribeOutcome::Failed);
}

#[test]
fn unsubscribe_outcome_maps_not_found() {
    assert_eq!(UnsubscribeOutcome::from_status(200), UnsubscribeOutcome::Unsubscribed);
    assert_eq!(UnsubscribeOutcome::from_status(404), UnsubscribeOutcome::NotSubscribed);
    assert_eq!(UnsubscribeOutcome::from_status(502), UnsubscribeOutcome::Failed);
}
