//! Catalog - In-memory name to path mapping built from the cache directory
//!
//! Rebuilt on every invocation by walking the cache with walkdir.

mod lookup;

pub use lookup::{Catalog, TemplateEntry};
