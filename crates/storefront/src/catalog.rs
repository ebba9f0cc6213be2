//! Catalog loading from YAML or JSON files.
//!
//! A catalog file is a list of `{ id, name, price, image }` entries:
//!
//! ```yaml
//! - id: "1"
//!   name: C2 RED
//!   price: 35
//!   image: assets/c2red.webp
//! ```

use std::path::Path;

use pocket_shop_core::{Catalog, CatalogEntry, CatalogError};
use thiserror::Error;

/// Errors loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Unsupported catalog format {0:?} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
    #[error("Invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// Serialization format of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Pick the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, CatalogLoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(CatalogLoadError::UnsupportedFormat(extension)),
        }
    }
}

/// Parse catalog file contents into unvalidated entries.
///
/// Only structural problems such as a missing field or a blank id fail here;
/// duplicates, blank names and negative prices are all left to
/// [`pocket_shop_core::validate_entries`].
///
/// # Errors
///
/// Returns an error if the content is not a list of catalog entries.
pub fn parse_entries(content: &str, format: CatalogFormat) -> Result<Vec<CatalogEntry>, CatalogLoadError> {
    let entries = match format {
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        CatalogFormat::Json => serde_json::from_str(content)?,
    };
    Ok(entries)
}

/// Parse and validate catalog file contents.
///
/// # Errors
///
/// Returns an error if the content does not parse or the catalog is empty,
/// has duplicate ids, blank names, or negative prices.
pub fn parse(content: &str, format: CatalogFormat) -> Result<Catalog, CatalogLoadError> {
    let entries = parse_entries(content, format)?;
    Ok(Catalog::from_entries(entries)?)
}

/// Read a catalog file's entries without validating them.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails [`parse_entries`].
pub async fn read_entries(path: &Path) -> Result<Vec<CatalogEntry>, CatalogLoadError> {
    let format = CatalogFormat::from_path(path)?;
    let content = tokio::fs::read_to_string(path).await?;
    parse_entries(&content, format)
}

/// Read and parse a catalog file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails [`parse`].
pub async fn load(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let catalog = Catalog::from_entries(read_entries(path).await?)?;

    tracing::info!(path = %path.display(), items = catalog.len(), "Catalog loaded");
    Ok(catalog)
}
