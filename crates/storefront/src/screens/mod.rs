//! Screen controllers.
//!
//! Each screen turns a `&Session` into a view model and renders it through an
//! Askama text template. Screens never mutate the session; user input goes
//! through [`Session::dispatch`](crate::session::Session::dispatch).

pub mod cart;
pub mod checkout;
pub mod home;

use askama::Template;
use pocket_shop_core::Price;

use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::navigation::Screen;
use crate::session::{Notice, Session};

pub use cart::{CartItemView, CartTemplate, CartView};
pub use checkout::CheckoutTemplate;
pub use home::HomeTemplate;

/// One-shot notice display data for templates.
#[derive(Clone)]
pub struct NoticeView {
    pub title: &'static str,
    pub message: &'static str,
    pub detail: Option<String>,
}

impl NoticeView {
    fn new(notice: &Notice, renderer: &Renderer) -> Self {
        let detail = match notice {
            Notice::EmptyCart => None,
            Notice::CheckoutSuccessful { item_count, total } => Some(format!(
                "{item_count} item(s), total {}",
                renderer.format_price(*total)
            )),
        };

        Self {
            title: notice.title(),
            message: notice.message(),
            detail,
        }
    }
}

/// Renders the session's current screen as text.
#[derive(Debug, Clone)]
pub struct Renderer {
    currency_symbol: String,
    title: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&StorefrontConfig::default())
    }
}

impl Renderer {
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            title: config.title.clone(),
        }
    }

    /// Format a price with the configured currency symbol.
    #[must_use]
    pub fn format_price(&self, price: Price) -> String {
        format!("{}{price}", self.currency_symbol)
    }

    /// Render whichever screen is on top of the session's stack.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`](crate::error::AppError::Render) if a
    /// template fails to render.
    pub fn render(&self, session: &Session) -> Result<String> {
        let output = match session.screen() {
            Screen::Home => HomeTemplate::new(self, session).render()?,
            Screen::Cart => CartTemplate::new(self, session).render()?,
            Screen::Checkout => CheckoutTemplate::new(self, session).render()?,
        };
        Ok(output)
    }

    fn notice(&self, session: &Session) -> Option<NoticeView> {
        session.notice().map(|notice| NoticeView::new(notice, self))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use pocket_shop_core::Catalog;

    use super::*;

    #[test]
    fn test_format_price() {
        let renderer = Renderer::default();
        assert_eq!(renderer.format_price(Price::from_units(35)), "₱35");

        let config = StorefrontConfig {
            currency_symbol: "$".to_string(),
            ..StorefrontConfig::default()
        };
        assert_eq!(
            Renderer::new(&config).format_price(Price::from_units(500)),
            "$500"
        );
    }

    #[test]
    fn test_render_follows_current_screen() {
        let renderer = Renderer::default();
        let mut session = Session::new(Arc::new(Catalog::default()));
        assert!(renderer.render(&session).unwrap().contains("Product List"));

        session
            .dispatch(crate::session::Action::Navigate(Screen::Cart))
            .unwrap();
        assert!(renderer.render(&session).unwrap().contains("Your Cart"));
    }
}
