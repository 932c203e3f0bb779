//! Search template names by regular expression

use anyhow::Result;
use regex::Regex;
use std::io::Write;
use tracing::{debug, error};

use crate::cache::store::CacheStore;
use crate::catalog::{Catalog, TemplateEntry};

/// Templates whose name matches `pattern`, in catalog order.
///
/// The pattern is unanchored and used as given; catalog names are already
/// lowercase.
pub fn matching_entries<'a>(catalog: &'a Catalog, pattern: &Regex) -> Vec<TemplateEntry<'a>> {
    catalog
        .entries()
        .filter(|entry| pattern.is_match(entry.name))
        .collect()
}

/// Run the search command.
///
/// The pattern is compiled once, so an invalid pattern is reported once on
/// stderr; it does not fail the command.
pub fn run_search(store: &CacheStore, pattern: &str) -> Result<()> {
    let catalog = Catalog::scan(store.path())?;

    let regex = match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(e) => {
            error!("{}", e);
            return Ok(());
        }
    };

    let mut stdout = std::io::stdout().lock();
    for entry in matching_entries(&catalog, &regex) {
        debug!("{} matched at {}", entry.name, entry.path.display());
        writeln!(stdout, "{}", entry.name)?;
    }

    Ok(())
}
