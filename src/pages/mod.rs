//! Route-level page components.

pub mod admin_dashboard;
pub mod classes;
pub mod community;
pub mod dashboard;
pub mod forbidden;
pub mod home;
pub mod login;
pub mod register;
pub mod trainer_dashboard;
pub mod trainers;
