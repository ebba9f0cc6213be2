//! Unified error handling.
//!
//! Provides a unified `AppError` type. Session actions and rendering return
//! `Result<T, AppError>`; the shell reports shopper mistakes and keeps going,
//! while anything else is logged as an error.

use pocket_shop_core::ProductId;
use thiserror::Error;

use crate::catalog::CatalogLoadError;
use crate::config::ConfigError;
use crate::navigation::Screen;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The product is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// A dialog is waiting for an answer.
    #[error("Please confirm or cancel the open dialog first")]
    DialogOpen,

    /// Confirm or cancel was sent with no dialog open.
    #[error("Nothing to confirm or cancel")]
    NoDialog,

    /// The action does not belong to the current screen.
    #[error("'{action}' is not available on the {screen} screen")]
    NotAvailable {
        action: &'static str,
        screen: Screen,
    },

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogLoadError),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Returns `true` for mistakes the shopper can correct at the prompt.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownProduct(_) | Self::DialogOpen | Self::NoDialog | Self::NotAvailable { .. }
        )
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
