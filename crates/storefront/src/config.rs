//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SHOP_CATALOG_PATH` - YAML or JSON catalog file (default: built-in catalog)
//! - `SHOP_CURRENCY_SYMBOL` - Symbol prefixed to prices (default: ₱)
//! - `SHOP_TITLE` - Heading of the product list (default: Product List)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_CURRENCY_SYMBOL: &str = "₱";
const DEFAULT_TITLE: &str = "Product List";
const MAX_CURRENCY_SYMBOL_CHARS: usize = 4;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Catalog file; `None` uses the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Symbol shown before every price
    pub currency_symbol: String,
    /// Heading of the product list screen
    pub title: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_path = lookup("SHOP_CATALOG_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let currency_symbol = lookup("SHOP_CURRENCY_SYMBOL")
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());
        validate_currency_symbol(&currency_symbol)?;

        let title = lookup("SHOP_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string());
        if title.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "SHOP_TITLE".to_string(),
                "must not be blank".to_string(),
            ));
        }

        Ok(Self {
            catalog_path,
            currency_symbol,
            title,
        })
    }

    /// Override the catalog file, e.g. from a command-line flag.
    #[must_use]
    pub fn with_catalog_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.catalog_path = path;
        }
        self
    }
}

fn validate_currency_symbol(symbol: &str) -> Result<(), ConfigError> {
    let chars = symbol.chars().count();
    if chars == 0 || chars > MAX_CURRENCY_SYMBOL_CHARS || symbol.trim() != symbol {
        return Err(ConfigError::InvalidEnvVar(
            "SHOP_CURRENCY_SYMBOL".to_string(),
            format!("must be 1-{MAX_CURRENCY_SYMBOL_CHARS} characters without surrounding spaces"),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.currency_symbol, "₱");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SHOP_CATALOG_PATH", "catalog.yaml"),
            ("SHOP_CURRENCY_SYMBOL", "$"),
            ("SHOP_TITLE", "Drinks"),
        ])
        .unwrap();

        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.yaml")));
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.title, "Drinks");
    }

    #[test]
    fn test_blank_catalog_path_is_ignored() {
        let config = load(&[("SHOP_CATALOG_PATH", "  ")]).unwrap();
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_invalid_currency_symbol() {
        assert!(matches!(
            load(&[("SHOP_CURRENCY_SYMBOL", "")]),
            Err(ConfigError::InvalidEnvVar(..))
        ));
        assert!(load(&[("SHOP_CURRENCY_SYMBOL", "pesos")]).is_err());
    }

    #[test]
    fn test_blank_title() {
        assert!(load(&[("SHOP_TITLE", " ")]).is_err());
    }

    #[test]
    fn test_with_catalog_path() {
        let config = StorefrontConfig::default()
            .with_catalog_path(Some(PathBuf::from("a.json")))
            .with_catalog_path(None);
        assert_eq!(config.catalog_path, Some(PathBuf::from("a.json")));
    }
}
