//! Scenario tests for Pocket Shop.
//!
//! Tests live in `tests/` and drive a [`Session`] the way a shopper would,
//! through screens and dialogs, checking both state and rendered output.
//!
//! ```bash
//! cargo test -p pocket-shop-integration-tests
//! ```

use std::sync::Arc;

use pocket_shop_core::{Catalog, ProductId};
use pocket_shop_storefront::error::Result;
use pocket_shop_storefront::navigation::Screen;
use pocket_shop_storefront::screens::Renderer;
use pocket_shop_storefront::session::{Action, Session};

/// A session over the built-in catalog, on the product list.
#[must_use]
pub fn new_session() -> Session {
    Session::new(Arc::new(Catalog::default()))
}

/// Parse a product id known to be valid.
///
/// # Panics
///
/// Panics if `id` is not a valid product id.
#[must_use]
#[allow(clippy::expect_used)]
pub fn product(id: &str) -> ProductId {
    ProductId::parse(id).expect("valid product id")
}

/// Add `quantity` of a product through the picker, as a shopper would:
/// go home, open the picker, step it up, confirm.
///
/// # Errors
///
/// Returns the first action the session rejects.
pub fn add_to_cart(session: &mut Session, id: &str, quantity: u32) -> Result<()> {
    if session.screen() != Screen::Home {
        session.dispatch(Action::Navigate(Screen::Home))?;
    }
    session.dispatch(Action::OpenPicker(product(id)))?;
    for _ in 1..quantity {
        session.dispatch(Action::PickerIncrement)?;
    }
    session.dispatch(Action::Confirm)
}

/// Render the current screen with the default renderer.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render(session: &Session) -> Result<String> {
    Renderer::default().render(session)
}
