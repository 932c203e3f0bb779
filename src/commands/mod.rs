//! Command handlers
//!
//! One module per user-facing operation:
//! - list: sorted template names
//! - update: wipe and re-download the cache
//! - generate: compose a .gitignore from named templates
//! - search: regex search over template names

pub mod generate;
pub mod list;
pub mod search;
pub mod update;
