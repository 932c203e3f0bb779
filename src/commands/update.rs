//! Refresh the template cache

use anyhow::Result;
use tracing::warn;

use crate::cache::store::CacheStore;
use crate::catalog::Catalog;
use crate::fetch::archive;

/// Unpack downloaded archive bytes into the store and rescan it
pub fn install(store: &CacheStore, bytes: &[u8]) -> Result<Catalog> {
    let dest = store.ensure()?;
    archive::extract(bytes, dest)?;
    Catalog::scan(dest)
}

/// Run the update command: clear the store, then download and extract
pub fn run_update(store: &CacheStore, url: &str) -> Result<()> {
    println!("Updating gitignore files..");

    store.clear()?;
    let bytes = archive::download(url)?;
    let catalog = install(store, &bytes)?;

    if catalog.is_empty() {
        warn!("archive from {} contained no .gitignore templates", url);
    }
    println!(
        "{} gitignore files saved to {}",
        catalog.len(),
        store.path().display()
    );

    Ok(())
}
