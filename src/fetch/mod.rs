//! Fetch module - Downloads the upstream template archive
//!
//! Provides:
//! - archive: HTTP download and zip extraction into the cache

pub mod archive;
