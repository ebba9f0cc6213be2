//! Confirm/cancel state machines for destructive cart actions.
//!
//! Both checkout and single-line removal follow the same shape:
//!
//! ```text
//! Idle ──request──▶ ConfirmPending ──confirm──▶ (apply) ──▶ Idle
//!                                  └─cancel───▶ (no-op) ──▶ Idle
//! ```
//!
//! [`Confirmation`] holds that state; [`CheckoutFlow`] and [`RemovalFlow`]
//! attach what happens to the cart when the shopper says yes.

use serde::Serialize;

use crate::cart::{Cart, CartLineItem};
use crate::types::{Price, ProductId};

/// State of a confirmation prompt carrying a payload `P` while pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation<P> {
    Idle,
    ConfirmPending(P),
}

impl<P> Default for Confirmation<P> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<P> Confirmation<P> {
    /// Returns `true` while waiting for the shopper's answer.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::ConfirmPending(_))
    }

    /// The pending payload, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&P> {
        match self {
            Self::ConfirmPending(payload) => Some(payload),
            Self::Idle => None,
        }
    }

    /// Start waiting for an answer about `payload`, replacing any earlier
    /// prompt.
    pub fn begin(&mut self, payload: P) {
        *self = Self::ConfirmPending(payload);
    }

    /// Accept the pending prompt and return to idle, yielding its payload.
    pub fn confirm(&mut self) -> Option<P> {
        self.resolve()
    }

    /// Decline the pending prompt and return to idle, yielding its payload.
    ///
    /// Declining is an ordinary outcome, not an error.
    pub fn cancel(&mut self) -> Option<P> {
        self.resolve()
    }

    fn resolve(&mut self) -> Option<P> {
        match std::mem::replace(self, Self::Idle) {
            Self::ConfirmPending(payload) => Some(payload),
            Self::Idle => None,
        }
    }
}

/// Errors from [`CheckoutFlow::request`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutError {
    /// There is nothing to check out.
    #[error("Cart is empty")]
    EmptyCart,
}

/// What was bought in a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub lines: Vec<CartLineItem>,
    pub item_count: u64,
    pub total: Price,
}

/// Checkout confirmation: Idle → ConfirmPending → Completed | Cancelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutFlow {
    state: Confirmation<()>,
}

impl CheckoutFlow {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Confirmation::Idle,
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Ask to check out `cart`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] and stays idle when the cart has
    /// no items.
    pub fn request(&mut self, cart: &Cart) -> Result<(), CheckoutError> {
        if cart.item_count() == 0 {
            return Err(CheckoutError::EmptyCart);
        }
        self.state.begin(());
        Ok(())
    }

    /// Complete a pending checkout, emptying `cart`.
    ///
    /// Returns `None` without touching the cart when nothing is pending.
    pub fn confirm(&mut self, cart: &mut Cart) -> Option<Receipt> {
        self.state.confirm()?;

        let item_count = cart.item_count();
        let total = cart.total();
        let lines = cart.drain();

        Some(Receipt {
            lines,
            item_count,
            total,
        })
    }

    /// Abandon a pending checkout. Returns `false` when nothing was pending.
    pub fn cancel(&mut self) -> bool {
        self.state.cancel().is_some()
    }
}

/// Line removal confirmation: Idle → RemovalConfirmPending → Removed | Cancelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalFlow {
    state: Confirmation<ProductId>,
}

impl RemovalFlow {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Confirmation::Idle,
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// The line awaiting confirmation, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&ProductId> {
        self.state.pending()
    }

    /// Ask to remove the line with `id`.
    pub fn request(&mut self, id: ProductId) {
        self.state.begin(id);
    }

    /// Remove the pending line from `cart`.
    ///
    /// Returns the removed line, or `None` if nothing was pending or the line
    /// is already gone.
    pub fn confirm(&mut self, cart: &mut Cart) -> Option<CartLineItem> {
        let id = self.state.confirm()?;
        cart.remove_item(&id)
    }

    /// Keep the line. Returns the id that was pending, if any.
    pub fn cancel(&mut self) -> Option<ProductId> {
        self.state.cancel()
    }
}
