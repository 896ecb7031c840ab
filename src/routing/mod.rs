//! Session-gated routing.
//!
//! ARCHITECTURE
//! ============
//! `table` maps paths to views, `navigator` applies the session guard and
//! bounds redirect chains, and `sink` turns redirect decisions into address
//! changes. Only `sink` knows about the browser.

pub mod navigator;
pub mod sink;
pub mod table;
