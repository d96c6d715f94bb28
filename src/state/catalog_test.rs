use super::*;

fn class(id: &str, name: &str, bookings: u64) -> FitnessClass {
    FitnessClass {
        id: id.to_owned(),
        name: name.to_owned(),
        image: None,
        description: String::new(),
        trainers: Vec::new(),
        booking_count: bookings,
    }
}

fn trainer_ref(id: &str, name: &str) -> TrainerRef {
    TrainerRef { id: id.to_owned(), name: name.to_owned(), photo_url: None }
}

#[test]
fn sort_puts_most_booked_first() {
    let sorted = sort_by_bookings(vec![
        class("a", "Yoga", 3),
        class("b", "HIIT", 12),
        class("c", "Spin", 7),
    ]);
    let ids: Vec<_> = sorted.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["b", "c", "a"]);
}

#[test]
fn sort_is_stable_for_equal_counts() {
    let sorted = sort_by_bookings(vec![
        class("a", "Yoga", 5),
        class("b", "HIIT", 5),
        class("c", "Spin", 5),
    ]);
    let ids: Vec<_> = sorted.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn featured_takes_top_six() {
    let classes: Vec<_> = (0..10).map(|i| class(&format!("c{i}"), "X", i)).collect();
    let featured = featured_classes(classes);
    assert_eq!(featured.len(), FEATURED_COUNT);
    assert_eq!(featured[0].booking_count, 9);
}

#[test]
fn featured_handles_short_lists() {
    let featured = featured_classes(vec![class("a", "Yoga", 1)]);
    assert_eq!(featured.len(), 1);
}

#[test]
fn dedup_keeps_first_occurrence_order() {
    let deduped = dedup_trainers(vec![
        trainer_ref("t1", "Sam"),
        trainer_ref("t2", "Alex"),
        trainer_ref("t1", "Sam"),
        trainer_ref("t3", "Kim"),
        trainer_ref("t2", "Alex"),
    ]);
    let ids: Vec<_> = deduped.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t1", "t2", "t3"]);
}

#[test]
fn filter_matches_case_insensitively() {
    let classes = vec![class("a", "Morning Yoga", 1), class("b", "HIIT Blast", 2)];
    let hits = filter_by_name(&classes, "yoga");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "a");
}

#[test]
fn empty_query_returns_everything() {
    let classes = vec![class("a", "Yoga", 1), class("b", "Spin", 2)];
    assert_eq!(filter_by_name(&classes, "   ").len(), 2);
}
