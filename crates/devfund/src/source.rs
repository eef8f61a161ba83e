use crate::prelude::{eprintln, *};
use devfund_core::catalog::{parse_catalog_json, Catalog};
use devfund_core::mock::{generate, MockOptions};
use std::path::Path;

/// Build the session catalog, either from `--catalog` or from the generator
pub fn load_catalog(global: &crate::Global) -> Result<Catalog> {
    let catalog = match &global.catalog {
        Some(path) => {
            if global.verbose {
                eprintln!("Loading catalog from {}", path.display());
            }
            read_catalog_file(path)?
        }
        None => {
            if global.verbose {
                eprintln!(
                    "Generating {} projects with seed {}",
                    global.projects, global.seed
                );
            }
            let options = MockOptions::new(global.seed, global.projects, chrono::Utc::now());
            generate(&options).map_err(Error::from)?
        }
    };

    log::info!(
        "catalog ready: {} projects, {} categories",
        catalog.list_projects().len(),
        catalog.list_categories().len()
    );

    Ok(catalog)
}

fn read_catalog_file(path: &Path) -> Result<Catalog> {
    let json = std::fs::read_to_string(path).map_err(|e| Error::CatalogRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    log::debug!("read {} bytes from {}", json.len(), path.display());

    let catalog = parse_catalog_json(&json).map_err(Error::from)?;
    Ok(catalog)
}
