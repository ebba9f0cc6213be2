//! Catalog file commands.
//!
//! # Usage
//!
//! ```bash
//! # Validate a catalog file, reporting every problem
//! pocket-shop catalog check catalog.yaml
//!
//! # List the configured catalog (SHOP_CATALOG_PATH or built-in)
//! pocket-shop catalog list
//! pocket-shop catalog list --catalog catalog.json
//! ```

use std::path::{Path, PathBuf};

use pocket_shop_core::{CatalogItem, validate_entries};
use pocket_shop_storefront::catalog::read_entries;
use pocket_shop_storefront::screens::Renderer;
use thiserror::Error;
use tracing::{error, info};

/// Errors reported by `catalog check`.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Catalog has no items")]
    Empty,
    #[error("{0} validation errors found")]
    Invalid(usize),
}

/// Validate a catalog file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, is empty, or has
/// duplicate ids, blank names or negative prices. Every problem is logged
/// before failing.
pub async fn check(file_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !file_path.exists() {
        return Err(format!("File not found: {}", file_path.display()).into());
    }

    info!(path = %file_path.display(), "Checking catalog");
    let entries = read_entries(file_path).await?;
    info!(items = entries.len(), "Parsed catalog");

    if entries.is_empty() {
        return Err(CheckError::Empty.into());
    }

    let errors = validate_entries(&entries);
    if !errors.is_empty() {
        error!("Catalog validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(CheckError::Invalid(errors.len()).into());
    }

    info!("Catalog validated successfully");
    Ok(())
}

/// Print the products of the configured catalog.
///
/// # Errors
///
/// Returns an error if configuration or the catalog file is invalid.
#[allow(clippy::print_stdout)]
pub async fn list(catalog: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(catalog)?;
    let catalog = super::load_catalog(&config).await?;
    let renderer = Renderer::new(&config);

    for item in catalog.items() {
        println!("{}", describe(item, &renderer));
    }
    Ok(())
}

fn describe(item: &CatalogItem, renderer: &Renderer) -> String {
    let mut line = format!(
        "{}\t{}\t{}",
        item.id,
        item.name,
        renderer.format_price(item.unit_price)
    );
    if !item.image.as_str().is_empty() {
        line.push('\t');
        line.push_str(item.image.as_str());
    }
    line
}
