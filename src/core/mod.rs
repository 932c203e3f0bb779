//! Core module - Shared building blocks
//!
//! This module provides:
//! - Domain error types
//! - Cache path resolution and template naming
//! - Logging setup

pub mod error;
pub mod logging;
pub mod paths;
