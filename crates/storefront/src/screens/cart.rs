//! Cart screen.
//!
//! Lists each line with its subtotal and a quantity stepper. Stepping a line
//! below one opens the removal dialog rather than removing it.

use askama::Template;
use pocket_shop_core::{Cart, CartLineItem};

use super::{NoticeView, Renderer};
use crate::session::{Dialog, Session};

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: String,
}

impl CartItemView {
    fn new(line: &CartLineItem, renderer: &Renderer) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            quantity: line.quantity.get(),
            price: renderer.format_price(line.unit_price),
            line_price: renderer.format_price(line.subtotal()),
            image: line.image.as_str().to_string(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    #[must_use]
    pub fn new(cart: &Cart, renderer: &Renderer) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| CartItemView::new(line, renderer))
                .collect(),
            subtotal: renderer.format_price(cart.total()),
            item_count: cart.item_count(),
        }
    }
}

/// Removal confirmation display data for templates.
#[derive(Clone)]
pub struct RemovalView {
    pub name: String,
}

/// Cart page template.
#[derive(Template)]
#[template(path = "cart.txt")]
pub struct CartTemplate {
    pub cart: CartView,
    pub removal: Option<RemovalView>,
    pub notice: Option<NoticeView>,
}

impl CartTemplate {
    #[must_use]
    pub fn new(renderer: &Renderer, session: &Session) -> Self {
        let removal = match session.dialog() {
            Some(Dialog::Removal(line)) => Some(RemovalView {
                name: line.name.clone(),
            }),
            _ => None,
        };

        Self {
            cart: CartView::new(session.cart(), renderer),
            removal,
            notice: renderer.notice(session),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use pocket_shop_core::{Catalog, ProductId};

    use super::*;
    use crate::navigation::Screen;
    use crate::session::Action;

    fn id(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    fn cart_session(entries: &[(&str, u32)]) -> Session {
        let mut s = Session::new(Arc::new(Catalog::default()));
        for &(product, quantity) in entries {
            s.dispatch(Action::OpenPicker(id(product))).unwrap();
            for _ in 1..quantity {
                s.dispatch(Action::PickerIncrement).unwrap();
            }
            s.dispatch(Action::Confirm).unwrap();
        }
        s.dispatch(Action::Navigate(Screen::Cart)).unwrap();
        s
    }

    #[test]
    fn test_empty_cart() {
        let output = CartTemplate::new(&Renderer::default(), &cart_session(&[]))
            .render()
            .unwrap();
        assert!(output.contains("Your cart is empty."));
    }

    #[test]
    fn test_cart_view_lines() {
        let s = cart_session(&[("1", 2), ("2", 1)]);
        let view = CartView::new(s.cart(), &Renderer::default());

        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].line_price, "₱70");
        assert_eq!(view.items[0].price, "₱35");
        assert_eq!(view.subtotal, "₱570");
        assert_eq!(view.item_count, 3);
    }

    #[test]
    fn test_renders_lines_with_steppers() {
        let s = cart_session(&[("1", 2)]);
        let output = CartTemplate::new(&Renderer::default(), &s)
            .render()
            .unwrap();
        assert!(output.contains("[1] C2 RED - ₱70   [-] 2 [+]"));
        assert!(!output.contains("Remove Item"));
    }

    #[test]
    fn test_removal_dialog() {
        let mut s = cart_session(&[("1", 1)]);
        s.dispatch(Action::Decrement(id("1"))).unwrap();

        let output = CartTemplate::new(&Renderer::default(), &s)
            .render()
            .unwrap();
        assert!(output.contains("Remove Item"));
        assert!(output.contains("remove C2 RED from your cart?"));
    }
}
