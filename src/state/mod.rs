//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `catalog`, `community`, `ui`) so
//! individual components can depend on small focused models. Everything
//! here is plain data and pure logic; signal wiring lives with the owners
//! (`auth::store` for the session, components for page-local state).

pub mod auth;
pub mod catalog;
pub mod community;
pub mod ui;
