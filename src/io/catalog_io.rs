use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::model::{Catalog, Category};

/// The built-in tmux dataset, compiled into the binary
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.toml");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// On-disk catalog schema
#[derive(Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
}

/// Parse catalog TOML into raw categories (no invariant checks; see
/// `ops::check` for validation of untrusted files)
pub fn parse_categories(text: &str) -> Result<Vec<Category>, CatalogError> {
    let file: CatalogFile = toml::from_str(text)?;
    Ok(file.categories)
}

/// Load the embedded catalog. The embedded data is build-time fixed, so a
/// parse failure here is a packaging defect surfaced at startup.
pub fn load_embedded() -> Result<Catalog, CatalogError> {
    Ok(Catalog::new(parse_categories(EMBEDDED_CATALOG)?))
}

/// Load an alternate catalog from a user-supplied file
pub fn load_from_path(path: &Path) -> Result<Catalog, CatalogError> {
    let text = fs::read_to_string(path).map_err(|e| CatalogError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(Catalog::new(parse_categories(&text)?))
}

/// Resolve the catalog: an explicit path wins over the embedded dataset
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(p) => load_from_path(p),
        None => load_embedded(),
    }
}
