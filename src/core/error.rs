//! Domain errors
//!
//! Plumbing failures (plain I/O) travel as `anyhow::Error` with context; the
//! cases a user can act on are spelled out here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JoeError {
    #[error("could not determine the home directory")]
    HomeDirUnavailable,

    #[error("no gitignore templates found at {}; run `joe update` first", .path.display())]
    CacheMissing { path: PathBuf },

    #[error("Unsupported files: {}\nRun `joe ls` to see list of available gitignores.", .0.join(", "))]
    UnsupportedTemplates(Vec<String>),

    #[error("failed to download {url}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("download of {url} failed with HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("archive entry escapes the cache directory: {0}")]
    UnsafeEntry(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_lists_names_and_hint() {
        let err = JoeError::UnsupportedTemplates(vec!["Ruby".into(), "Elm2".into()]);
        let msg = err.to_string();
        assert!(msg.starts_with("Unsupported files: Ruby, Elm2\n"));
        assert!(msg.contains("joe ls"));
    }

    #[test]
    fn test_cache_missing_mentions_update() {
        let err = JoeError::CacheMissing {
            path: PathBuf::from("/home/me/.joe-data"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/home/me/.joe-data"));
        assert!(msg.contains("joe update"));
    }
}
