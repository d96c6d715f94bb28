//! Authentication subsystem: identity provider client, backend session
//! bridge, and the process-wide auth store.
//!
//! Sign-in data flow: provider principal change → bridge sync sequence
//! (ensure backend user → session cookie → role) → auth store update →
//! re-render of gated views.

pub mod bridge;
pub mod error;
pub mod identity;
pub mod store;
