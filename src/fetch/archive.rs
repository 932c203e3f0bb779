//! Archive fetcher
//!
//! Downloads the github/gitignore zip and unpacks its templates into the
//! cache directory, dropping the top-level `gitignore-main/` folder.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, Cursor};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};
use zip::ZipArchive;

use crate::core::error::JoeError;

/// Upstream archive of the `main` branch
pub const GITIGNORE_URL: &str = "https://github.com/github/gitignore/archive/main.zip";

/// Top-level folder every useful archive entry lives under
pub const ARCHIVE_PREFIX: &str = "gitignore-main";

/// Download the archive fully into memory
pub fn download(url: &str) -> Result<Vec<u8>> {
    info!("downloading {}", url);

    let response = reqwest::blocking::get(url).map_err(|source| JoeError::Download {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(JoeError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        }
        .into());
    }

    let bytes = response.bytes().map_err(|source| JoeError::Download {
        url: url.to_string(),
        source,
    })?;

    debug!("downloaded {} bytes", bytes.len());
    Ok(bytes.to_vec())
}

/// Map an archive path to its location under the destination.
///
/// Returns `Ok(None)` for entries outside [`ARCHIVE_PREFIX`] or for the prefix
/// folder itself.
fn relative_target(entry_path: &Path) -> Result<Option<PathBuf>> {
    let Ok(rel) = entry_path.strip_prefix(ARCHIVE_PREFIX) else {
        return Ok(None);
    };
    if rel.as_os_str().is_empty() {
        return Ok(None);
    }
    if !rel.components().all(|c| matches!(c, Component::Normal(_))) {
        return Err(JoeError::UnsafeEntry(entry_path.display().to_string()).into());
    }
    Ok(Some(rel.to_path_buf()))
}

/// Unpack template files from a zip archive held in memory into `dest`.
///
/// Only regular files are written; directory structure below the prefix is
/// kept. Returns the number of files written.
pub fn extract(bytes: &[u8], dest: &Path) -> Result<usize> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).context("Failed to read archive")?;
    let mut written = 0;

    for index in 0..archive.len() {
        let mut file = archive
            .by_index(index)
            .context("Failed to read archive entry")?;
        if !file.is_file() || file.is_symlink() {
            continue;
        }

        let Some(entry_path) = file.enclosed_name() else {
            return Err(JoeError::UnsafeEntry(file.name().to_string()).into());
        };
        let Some(rel) = relative_target(&entry_path)? else {
            debug!("skipping {}", entry_path.display());
            continue;
        };

        let target = dest.join(&rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let mut out = File::create(&target)
            .with_context(|| format!("Failed to create {}", target.display()))?;
        io::copy(&mut file, &mut out)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        written += 1;
    }

    info!("extracted {} files into {}", written, dest.display());
    Ok(written)
}

/// Build an in-memory zip from `(path, content)` pairs
#[cfg(test)]
pub(crate) fn zip_bytes(files: &[(&str, &[u8])]) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (path, content) in files {
        writer
            .start_file(*path, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}
