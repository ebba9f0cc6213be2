//! The shopping session.
//!
//! A [`Session`] owns the cart for the lifetime of one run and is the only
//! place the cart is mutated. Screens read it through `&Session`; shopper input
//! arrives as an [`Action`] passed to [`Session::dispatch`], which either
//! applies completely or returns an error without touching the cart, the
//! screen stack, or any dialog. Rendering happens between dispatches, so every
//! screen sees one consistent state.

use std::sync::Arc;

use pocket_shop_core::{
    Cart, CartLineItem, Catalog, CheckoutError, CheckoutFlow, PendingSelection, Price, ProductId,
    QuantityChange, Receipt, RemovalFlow, Step,
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::navigation::{Navigator, Screen};

/// A shopper interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Go to a screen.
    Navigate(Screen),
    /// Return to the previous screen.
    Back,
    /// Open the quantity picker for a product (Home).
    OpenPicker(ProductId),
    /// Raise the picker quantity.
    PickerIncrement,
    /// Lower the picker quantity, stopping at one.
    PickerDecrement,
    /// Raise a cart line's quantity (Cart).
    Increment(ProductId),
    /// Lower a cart line's quantity; at one this asks to remove it (Cart).
    Decrement(ProductId),
    /// Ask to place the order (Checkout).
    Checkout,
    /// Answer yes to the open dialog.
    Confirm,
    /// Answer no to the open dialog.
    Cancel,
}

impl Action {
    /// Short name used in messages and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Navigate(_) => "navigate",
            Self::Back => "back",
            Self::OpenPicker(_) => "add",
            Self::PickerIncrement => "more",
            Self::PickerDecrement => "less",
            Self::Increment(_) => "inc",
            Self::Decrement(_) => "dec",
            Self::Checkout => "pay",
            Self::Confirm => "confirm",
            Self::Cancel => "cancel",
        }
    }

    const fn answers_dialog(&self) -> bool {
        matches!(
            self,
            Self::Confirm | Self::Cancel | Self::PickerIncrement | Self::PickerDecrement
        )
    }
}

/// The prompt currently waiting for an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog<'a> {
    /// Add-to-cart quantity picker.
    Picker(&'a PendingSelection),
    /// "Remove this item?" for a cart line.
    Removal(&'a CartLineItem),
    /// "Proceed with the checkout?"
    Checkout,
}

/// One-shot message shown on the next render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Checkout was requested with nothing in the cart.
    EmptyCart,
    /// The order went through.
    CheckoutSuccessful { item_count: u64, total: Price },
}

impl Notice {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::EmptyCart => "Cart is empty",
            Self::CheckoutSuccessful { .. } => "Checkout Successful",
        }
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyCart => "Please add items before checking out.",
            Self::CheckoutSuccessful { .. } => "Thank you for your purchase!",
        }
    }
}

/// State of one shopping session.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<Catalog>,
    cart: Cart,
    navigator: Navigator,
    picker: Option<PendingSelection>,
    removal: RemovalFlow,
    checkout: CheckoutFlow,
    notice: Option<Notice>,
    last_receipt: Option<Receipt>,
}

impl Session {
    /// Start a session with an empty cart on the product list.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            navigator: Navigator::new(),
            picker: None,
            removal: RemovalFlow::new(),
            checkout: CheckoutFlow::new(),
            notice: None,
            last_receipt: None,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The message produced by the most recent action, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The receipt of the last completed checkout.
    #[must_use]
    pub const fn last_receipt(&self) -> Option<&Receipt> {
        self.last_receipt.as_ref()
    }

    /// The open dialog, if any. At most one is open at a time.
    #[must_use]
    pub fn dialog(&self) -> Option<Dialog<'_>> {
        if let Some(selection) = &self.picker {
            return Some(Dialog::Picker(selection));
        }
        if let Some(id) = self.removal.pending() {
            return self.cart.line(id).map(Dialog::Removal);
        }
        if self.checkout.is_pending() {
            return Some(Dialog::Checkout);
        }
        None
    }

    /// Apply one shopper action.
    ///
    /// # Errors
    ///
    /// Returns a user error (see [`AppError::is_user_error`]) when the action
    /// is not possible right now; the cart, screen and dialogs are left
    /// unchanged.
    #[instrument(skip(self), fields(screen = %self.screen()))]
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        if self.dialog().is_some() && !action.answers_dialog() {
            tracing::warn!(action = action.name(), "Rejected while a dialog is open");
            return Err(AppError::DialogOpen);
        }

        self.notice = None;

        match action {
            Action::Navigate(screen) => {
                self.navigator.navigate(screen);
                tracing::debug!(to = %screen, depth = self.navigator.depth(), "Navigated");
            }
            Action::Back => {
                if !self.navigator.back() {
                    return Err(self.not_available(&action));
                }
                tracing::debug!(to = %self.screen(), "Navigated back");
            }
            Action::OpenPicker(ref id) => {
                self.require_screen(Screen::Home, &action)?;
                let item = self
                    .catalog
                    .get(id)
                    .cloned()
                    .ok_or_else(|| AppError::UnknownProduct(id.clone()))?;
                self.picker = Some(PendingSelection::new(item));
            }
            Action::PickerIncrement | Action::PickerDecrement => {
                let picker = self.picker.as_mut().ok_or(AppError::NoDialog)?;
                if action == Action::PickerIncrement {
                    picker.increment();
                } else {
                    picker.decrement();
                }
            }
            Action::Increment(ref id) | Action::Decrement(ref id) => {
                self.require_screen(Screen::Cart, &action)?;
                let step = if matches!(action, Action::Increment(_)) {
                    Step::Increment
                } else {
                    Step::Decrement
                };
                self.change_quantity(id, step);
            }
            Action::Checkout => {
                self.require_screen(Screen::Checkout, &action)?;
                if let Err(CheckoutError::EmptyCart) = self.checkout.request(&self.cart) {
                    tracing::info!("Checkout rejected: cart is empty");
                    self.notice = Some(Notice::EmptyCart);
                }
            }
            Action::Confirm => self.confirm()?,
            Action::Cancel => self.cancel()?,
        }

        Ok(())
    }

    fn change_quantity(&mut self, id: &ProductId, step: Step) {
        match self.cart.change_quantity(id, step) {
            QuantityChange::Updated(quantity) => {
                tracing::debug!(product = %id, %quantity, "Quantity changed");
            }
            QuantityChange::RemovalRequested => {
                tracing::debug!(product = %id, "Removal confirmation requested");
                self.removal.request(id.clone());
            }
            QuantityChange::NotFound => {
                tracing::debug!(product = %id, "Quantity change for line not in cart");
            }
        }
    }

    fn confirm(&mut self) -> Result<()> {
        if let Some(selection) = self.picker.take() {
            let product = selection.item().id.clone();
            let added = selection.quantity();
            let quantity = selection.commit(&mut self.cart);
            tracing::info!(%product, %added, %quantity, "Added to cart");
            return Ok(());
        }

        if self.removal.is_pending() {
            if let Some(line) = self.removal.confirm(&mut self.cart) {
                tracing::info!(product = %line.id, "Removed from cart");
            }
            return Ok(());
        }

        if let Some(receipt) = self.checkout.confirm(&mut self.cart) {
            tracing::info!(
                items = receipt.item_count,
                total = %receipt.total,
                "Checkout completed"
            );
            self.notice = Some(Notice::CheckoutSuccessful {
                item_count: receipt.item_count,
                total: receipt.total,
            });
            self.last_receipt = Some(receipt);
            return Ok(());
        }

        Err(AppError::NoDialog)
    }

    fn cancel(&mut self) -> Result<()> {
        if self.picker.take().is_some() {
            tracing::debug!("Add to cart cancelled");
            return Ok(());
        }

        if let Some(id) = self.removal.cancel() {
            tracing::debug!(product = %id, "Removal cancelled");
            return Ok(());
        }

        if self.checkout.cancel() {
            tracing::debug!("Checkout cancelled");
            return Ok(());
        }

        Err(AppError::NoDialog)
    }

    fn require_screen(&self, screen: Screen, action: &Action) -> Result<()> {
        if self.screen() == screen {
            Ok(())
        } else {
            Err(self.not_available(action))
        }
    }

    fn not_available(&self, action: &Action) -> AppError {
        AppError::NotAvailable {
            action: action.name(),
            screen: self.screen(),
        }
    }
}
