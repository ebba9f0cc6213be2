//! The add-to-cart quantity picker.

use crate::cart::Cart;
use crate::catalog::CatalogItem;
use crate::types::Quantity;

/// A catalog item and quantity the shopper is about to add.
///
/// Nothing reaches the cart until [`PendingSelection::commit`] is called;
/// cancelling is simply dropping the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSelection {
    item: CatalogItem,
    quantity: Quantity,
}

impl PendingSelection {
    /// Start picking `item`, at quantity one.
    #[must_use]
    pub const fn new(item: CatalogItem) -> Self {
        Self {
            item,
            quantity: Quantity::ONE,
        }
    }

    #[must_use]
    pub const fn item(&self) -> &CatalogItem {
        &self.item
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Raise the chosen quantity by one.
    pub const fn increment(&mut self) -> Quantity {
        self.quantity = self.quantity.increment();
        self.quantity
    }

    /// Lower the chosen quantity by one, stopping at one.
    pub fn decrement(&mut self) -> Quantity {
        self.quantity = self.quantity.decrement().unwrap_or(Quantity::ONE);
        self.quantity
    }

    /// Add the selection to `cart`, returning the line's resulting quantity.
    pub fn commit(self, cart: &mut Cart) -> Quantity {
        cart.add_or_increment(&self.item, self.quantity)
    }
}
