//! Pure list logic for the class and trainer catalog pages.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{FitnessClass, TrainerRef};

/// Number of classes featured on the home page.
pub const FEATURED_COUNT: usize = 6;

/// Sort classes by booking count, most popular first. Stable, so classes
/// with equal counts keep their backend order.
#[must_use]
pub fn sort_by_bookings(mut classes: Vec<FitnessClass>) -> Vec<FitnessClass> {
    classes.sort_by(|a, b| b.booking_count.cmp(&a.booking_count));
    classes
}

/// The most-booked classes for the home page hero section.
#[must_use]
pub fn featured_classes(classes: Vec<FitnessClass>) -> Vec<FitnessClass> {
    let mut sorted = sort_by_bookings(classes);
    sorted.truncate(FEATURED_COUNT);
    sorted
}

/// Deduplicate trainer references by id, preserving first-seen order. A
/// trainer teaching several of a class's sessions appears once.
#[must_use]
pub fn dedup_trainers(trainers: Vec<TrainerRef>) -> Vec<TrainerRef> {
    let mut seen: Vec<String> = Vec::with_capacity(trainers.len());
    trainers
        .into_iter()
        .filter(|t| {
            if seen.iter().any(|id| id == &t.id) {
                false
            } else {
                seen.push(t.id.clone());
                true
            }
        })
        .collect()
}

/// Case-insensitive substring filter for the class search box.
#[must_use]
pub fn filter_by_name(classes: &[FitnessClass], query: &str) -> Vec<FitnessClass> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return classes.to_vec();
    }
    classes
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
