//! Command implementations.

pub mod anchors;
pub mod layout;
