//! Path resolution for the template cache

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::error::JoeError;

/// Name of the cache directory under the user's home
pub const DATA_DIR: &str = ".joe-data";

/// Suffix every template file carries
pub const TEMPLATE_SUFFIX: &str = ".gitignore";

/// Get the user's home directory
///
/// `HOME` wins over `dirs::home_dir()` so the cache follows an overridden
/// environment (containers, tests).
pub fn home_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("HOME").filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir().ok_or_else(|| JoeError::HomeDirUnavailable.into())
}

/// Get the cache directory for a given home
pub fn data_dir(home: &Path) -> PathBuf {
    home.join(DATA_DIR)
}

/// Derive the catalog key for a file name, if it is a template
pub fn template_name(file_name: &str) -> Option<String> {
    file_name
        .strip_suffix(TEMPLATE_SUFFIX)
        .map(|stem| stem.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir() {
        let home = Path::new("/home/me");
        assert_eq!(data_dir(home), PathBuf::from("/home/me/.joe-data"));
    }

    #[test]
    fn test_template_name_lowercases() {
        assert_eq!(template_name("Python.gitignore"), Some("python".to_string()));
        assert_eq!(
            template_name("VisualStudio.gitignore"),
            Some("visualstudio".to_string())
        );
    }

    #[test]
    fn test_template_name_rejects_other_files() {
        assert_eq!(template_name("README.md"), None);
        assert_eq!(template_name("Go.gitignore.bak"), None);
    }

    #[test]
    fn test_template_name_bare_suffix() {
        assert_eq!(template_name(".gitignore"), Some(String::new()));
    }
}
