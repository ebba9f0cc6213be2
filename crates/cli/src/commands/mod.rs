//! CLI command implementations.

pub mod catalog;
pub mod shop;

use std::path::PathBuf;
use std::sync::Arc;

use pocket_shop_core::Catalog;
use pocket_shop_storefront::catalog as catalog_file;
use pocket_shop_storefront::config::StorefrontConfig;

/// Load configuration from the environment, applying a `--catalog` override.
///
/// # Errors
///
/// Returns an error if an environment variable is invalid.
pub fn load_config(
    catalog: Option<PathBuf>,
) -> Result<StorefrontConfig, Box<dyn std::error::Error>> {
    Ok(StorefrontConfig::from_env()?.with_catalog_path(catalog))
}

/// Load the configured catalog file, or the built-in catalog if none is set.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be read or is invalid.
pub async fn load_catalog(
    config: &StorefrontConfig,
) -> Result<Arc<Catalog>, Box<dyn std::error::Error>> {
    let catalog = match &config.catalog_path {
        Some(path) => catalog_file::load(path).await?,
        None => {
            tracing::info!("Using built-in catalog");
            Catalog::default()
        }
    };
    Ok(Arc::new(catalog))
}
