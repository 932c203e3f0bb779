//! Compose a .gitignore from named templates

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use tracing::debug;

use crate::cache::store::CacheStore;
use crate::catalog::Catalog;
use crate::core::error::JoeError;

/// Attribution line at the very top of generated output
pub const ATTRIBUTION: &str = "#### joe made this: http://goel.io/joe\n";

/// OS artifacts ignored in every generated file
pub const OS_BOILERPLATE: &str = "### Operating Systems ###\n# Darwin\n.DS_Store\n";

/// Split a comma-separated request, preserving order and spelling.
///
/// Empty segments are dropped; whitespace is kept.
pub fn parse_names(spec: &str) -> Vec<&str> {
    spec.split(',').filter(|name| !name.is_empty()).collect()
}

/// Build the .gitignore bytes for the requested names.
///
/// Template contents are copied verbatim, whatever their encoding. Every name
/// is looked up before anything is returned; if any are missing the whole
/// request fails with [`JoeError::UnsupportedTemplates`].
pub fn compose(catalog: &Catalog, names: &[&str]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.extend_from_slice(ATTRIBUTION.as_bytes());
    out.extend_from_slice(OS_BOILERPLATE.as_bytes());
    let mut not_found = Vec::new();

    for (index, name) in names.iter().enumerate() {
        let Some(path) = catalog.get(name) else {
            not_found.push(name.to_string());
            continue;
        };

        let contents =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        debug!("adding {} from {}", name, path.display());

        out.extend_from_slice(format!("\n#### {name} ####\n").as_bytes());
        out.extend_from_slice(&contents);
        if index + 1 < names.len() {
            out.push(b'\n');
        }
    }

    if !not_found.is_empty() {
        return Err(JoeError::UnsupportedTemplates(not_found).into());
    }

    Ok(out)
}

/// Run the generate command
pub fn run_generate(store: &CacheStore, spec: &str) -> Result<()> {
    let catalog = Catalog::scan(store.path())?;
    let output = compose(&catalog, &parse_names(spec))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
