//! Product list screen.

use askama::Template;

use super::{NoticeView, Renderer};
use crate::session::{Dialog, Session};

/// Catalog item display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
}

/// Quantity picker display data for templates.
#[derive(Clone)]
pub struct PickerView {
    pub name: String,
    pub price: String,
    pub quantity: u32,
}

/// Product list template.
#[derive(Template)]
#[template(path = "home.txt")]
pub struct HomeTemplate {
    pub title: String,
    pub products: Vec<ProductView>,
    pub cart_count: u64,
    pub picker: Option<PickerView>,
    pub notice: Option<NoticeView>,
}

impl HomeTemplate {
    #[must_use]
    pub fn new(renderer: &Renderer, session: &Session) -> Self {
        let products = session
            .catalog()
            .items()
            .iter()
            .map(|item| ProductView {
                id: item.id.to_string(),
                name: item.name.clone(),
                price: renderer.format_price(item.unit_price),
                image: item.image.as_str().to_string(),
            })
            .collect();

        let picker = match session.dialog() {
            Some(Dialog::Picker(selection)) => Some(PickerView {
                name: selection.item().name.clone(),
                price: renderer.format_price(selection.item().unit_price),
                quantity: selection.quantity().get(),
            }),
            _ => None,
        };

        Self {
            title: renderer.title.clone(),
            products,
            cart_count: session.cart().item_count(),
            picker,
            notice: renderer.notice(session),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use pocket_shop_core::{Catalog, ProductId};

    use super::*;
    use crate::session::Action;

    fn session() -> Session {
        Session::new(Arc::new(Catalog::default()))
    }

    #[test]
    fn test_lists_catalog_with_prices() {
        let output = HomeTemplate::new(&Renderer::default(), &session())
            .render()
            .unwrap();

        assert!(output.contains("[1] C2 RED - ₱35"));
        assert!(output.contains("[2] C2 GREEN - ₱500"));
        assert!(output.contains("[3] C2 YELLOW - ₱500"));
        assert!(output.contains("Go to Cart (0)"));
    }

    #[test]
    fn test_picker_dialog() {
        let mut s = session();
        s.dispatch(Action::OpenPicker(ProductId::parse("1").unwrap()))
            .unwrap();
        s.dispatch(Action::PickerIncrement).unwrap();

        let template = HomeTemplate::new(&Renderer::default(), &s);
        assert_eq!(template.picker.as_ref().unwrap().quantity, 2);

        let output = template.render().unwrap();
        assert!(output.contains("Add C2 RED to Cart"));
        assert!(output.contains("Price: ₱35"));
        assert!(output.contains("[-] 2 [+]"));
    }

    #[test]
    fn test_cart_count_after_add() {
        let mut s = session();
        s.dispatch(Action::OpenPicker(ProductId::parse("2").unwrap()))
            .unwrap();
        s.dispatch(Action::PickerIncrement).unwrap();
        s.dispatch(Action::PickerIncrement).unwrap();
        s.dispatch(Action::Confirm).unwrap();

        let output = HomeTemplate::new(&Renderer::default(), &s)
            .render()
            .unwrap();
        assert!(output.contains("Go to Cart (3)"));
        assert!(!output.contains("Add C2 GREEN to Cart"));
    }
}
