//! Reusable view components.

pub mod class_card;
pub mod footer;
pub mod navbar;
pub mod newsletter_form;
pub mod post_card;
pub mod route_guard;
pub mod toast;
pub mod trainer_card;
