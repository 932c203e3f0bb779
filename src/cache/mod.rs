//! Cache module - Manages the local template directory (~/.joe-data)
//!
//! Provides:
//! - Cache location resolution
//! - Destructive clear ahead of a refresh

pub mod store;
