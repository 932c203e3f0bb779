//! List available templates

use anyhow::Result;
use std::io::Write;

use crate::cache::store::CacheStore;
use crate::catalog::Catalog;

/// Render the listing: a count line followed by sorted names
pub fn render_list(catalog: &Catalog) -> String {
    let mut out = format!("{} supported .gitignore files:\n", catalog.len());
    for name in catalog.sorted_names() {
        out.push_str(name);
        out.push('\n');
    }
    out
}

/// Run the list command
pub fn run_list(store: &CacheStore) -> Result<()> {
    let catalog = Catalog::scan(store.path())?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(render_list(&catalog).as_bytes())?;
    Ok(())
}
