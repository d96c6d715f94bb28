//! Small browser utilities.

pub mod theme;
pub mod time;
