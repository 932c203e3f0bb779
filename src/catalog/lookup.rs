//! Catalog lookup over the cached templates

use anyhow::Result;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::core::error::JoeError;
use crate::core::paths::template_name;

/// A single template discovered in the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry<'a> {
    /// Lowercased file name without the `.gitignore` suffix
    pub name: &'a str,
    pub path: &'a Path,
}

/// Templates keyed by lowercase name, in walk order
#[derive(Debug, Default)]
pub struct Catalog {
    entries: IndexMap<String, PathBuf>,
}

impl Catalog {
    /// Scan a cache directory recursively.
    ///
    /// Fails with [`JoeError::CacheMissing`] when the directory cannot be read.
    /// When two files share a name the one visited last wins.
    pub fn scan(root: &Path) -> Result<Self> {
        if std::fs::read_dir(root).is_err() {
            return Err(JoeError::CacheMissing {
                path: root.to_path_buf(),
            }
            .into());
        }

        let mut catalog = Self::default();
        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().and_then(template_name) else {
                continue;
            };
            trace!("found {} at {}", name, entry.path().display());
            catalog.insert(name, entry.into_path());
        }

        debug!("catalog has {} templates", catalog.len());
        Ok(catalog)
    }

    pub fn insert(&mut self, name: String, path: PathBuf) {
        self.entries.insert(name, path);
    }

    /// Look up a template; the query is lowercased but not trimmed
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(&name.to_lowercase()).map(PathBuf::as_path)
    }

    /// Names in discovery order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Names in ascending ordinal order
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        names
    }

    /// Entries in discovery order, borrowed from the catalog
    pub fn entries(&self) -> impl Iterator<Item = TemplateEntry<'_>> {
        self.entries.iter().map(|(name, path)| TemplateEntry {
            name: name.as_str(),
            path: path.as_path(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_scan_missing_directory() {
        let temp = tempdir().unwrap();
        let err = Catalog::scan(&temp.path().join("absent")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<JoeError>(),
            Some(JoeError::CacheMissing { .. })
        ));
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp = tempdir().unwrap();
        let catalog = Catalog::scan(temp.path()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_scan_only_gitignore_files() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("Go.gitignore"), "bin/\n");
        write_file(&temp.path().join("README.md"), "# readme\n");
        write_file(&temp.path().join("LICENSE"), "CC0\n");

        let catalog = Catalog::scan(temp.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["go"]);
    }

    #[test]
    fn test_scan_recurses_into_subdirectories() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("Python.gitignore"), "__pycache__/\n");
        write_file(&temp.path().join("Global/Vim.gitignore"), "*.swp\n");
        write_file(
            &temp.path().join("community/JavaScript/Vue.gitignore"),
            "dist/\n",
        );

        let catalog = Catalog::scan(temp.path()).unwrap();
        assert_eq!(catalog.sorted_names(), vec!["python", "vim", "vue"]);
        assert_eq!(
            catalog.get("vim"),
            Some(temp.path().join("Global/Vim.gitignore").as_path())
        );
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let mut catalog = Catalog::default();
        catalog.insert("python".into(), PathBuf::from("/c/Python.gitignore"));

        assert!(catalog.get("Python").is_some());
        assert!(catalog.get("PYTHON").is_some());
        assert!(catalog.get(" python").is_none());
    }

    #[test]
    fn test_duplicate_names_last_write_wins() {
        let mut catalog = Catalog::default();
        catalog.insert("node".into(), PathBuf::from("/c/Node.gitignore"));
        catalog.insert("go".into(), PathBuf::from("/c/Go.gitignore"));
        catalog.insert("node".into(), PathBuf::from("/c/community/node.gitignore"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("node"),
            Some(Path::new("/c/community/node.gitignore"))
        );
    }

    #[test]
    fn test_sorted_names_is_ordinal() {
        let mut catalog = Catalog::default();
        for name in ["zephir", "actionscript", "c++", "c", "android"] {
            catalog.insert(name.into(), PathBuf::from(format!("/c/{name}")));
        }
        assert_eq!(
            catalog.sorted_names(),
            vec!["actionscript", "android", "c", "c++", "zephir"]
        );
    }

    #[test]
    fn test_entries_expose_name_and_path() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("Rust.gitignore"), "target/\n");

        let catalog = Catalog::scan(temp.path()).unwrap();
        let entries: Vec<TemplateEntry<'_>> = catalog.entries().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "rust");
        assert!(entries[0].path.ends_with("Rust.gitignore"));
    }
}
