//! Cache store - The directory holding downloaded templates

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::paths::{data_dir, home_dir};

/// Location of the cached templates
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the store from an explicit override or `<home>/.joe-data`
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self> {
        let root = match override_dir {
            Some(dir) => dir.to_path_buf(),
            None => data_dir(&home_dir()?),
        };
        Ok(Self::new(root))
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Ensure the cache directory exists
    pub fn ensure(&self) -> Result<&Path> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create {}", self.root.display()))?;
        Ok(&self.root)
    }

    /// Remove everything inside the cache directory.
    ///
    /// A directory that does not exist yet counts as already clear.
    pub fn clear(&self) -> Result<()> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", self.root.display()))
            }
        };

        for entry in entries {
            let path = entry?.path();
            debug!("removing {}", path.display());
            let removed = if path.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };
            removed.with_context(|| format!("Failed to remove {}", path.display()))?;
        }

        Ok(())
    }
}
