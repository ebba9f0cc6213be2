//! Checkout screen: order summary, total, and the checkout confirmation.

use askama::Template;

use super::{CartView, NoticeView, Renderer};
use crate::session::{Dialog, Session};

/// Order summary template.
#[derive(Template)]
#[template(path = "checkout.txt")]
pub struct CheckoutTemplate {
    pub cart: CartView,
    pub confirm_pending: bool,
    pub notice: Option<NoticeView>,
}

impl CheckoutTemplate {
    #[must_use]
    pub fn new(renderer: &Renderer, session: &Session) -> Self {
        Self {
            cart: CartView::new(session.cart(), renderer),
            confirm_pending: matches!(session.dialog(), Some(Dialog::Checkout)),
            notice: renderer.notice(session),
        }
    }
}
