//! Shared UI components.

pub mod gate;
pub mod header;
