//! The shopping cart and the operations that mutate it.
//!
//! [`Cart`] is the only way to change a cart's lines, and every method leaves
//! it satisfying two invariants:
//!
//! - at most one [`CartLineItem`] per [`ProductId`]
//! - every line has a quantity of at least one
//!
//! The second holds by construction ([`Quantity`] cannot be zero). Lowering a
//! line below one is never done implicitly: [`Cart::change_quantity`] reports
//! [`QuantityChange::RemovalRequested`] and leaves the line alone, and the
//! caller removes it with [`Cart::remove_item`] once the shopper confirms.

use serde::Serialize;

use crate::catalog::{CatalogItem, ImageRef};
use crate::types::{Price, ProductId, Quantity};

/// A catalog item in the cart, with the chosen quantity.
///
/// Name, price and image are copied from the catalog when the line is first
/// added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub image: ImageRef,
    pub quantity: Quantity,
}

impl CartLineItem {
    fn from_catalog(item: &CatalogItem, quantity: Quantity) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price,
            image: item.image.clone(),
            quantity,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.unit_price * self.quantity
    }
}

/// One press of a quantity stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Increment,
    Decrement,
}

/// Result of [`Cart::change_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now has this quantity.
    Updated(Quantity),
    /// The line is at one and was asked to go lower. The cart is unchanged;
    /// the caller should ask the shopper before calling [`Cart::remove_item`].
    RemovalRequested,
    /// No line has the given id.
    NotFound,
}

/// An ordered list of line items, in the order they were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The cart's lines.
    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    /// Look up a line by product id.
    #[must_use]
    pub fn line(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.lines.iter().find(|line| &line.id == id)
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLineItem> {
        self.lines.iter_mut().find(|line| &line.id == id)
    }

    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` of `item`.
    ///
    /// If the item is already in the cart, its quantity grows by `quantity`
    /// (the chosen amount is added, not substituted). Otherwise a new line is
    /// appended. Returns the line's resulting quantity.
    pub fn add_or_increment(&mut self, item: &CatalogItem, quantity: Quantity) -> Quantity {
        if let Some(line) = self.line_mut(&item.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return line.quantity;
        }

        self.lines.push(CartLineItem::from_catalog(item, quantity));
        quantity
    }

    /// Step the quantity of the line with `id` up or down by one.
    ///
    /// Decrementing a line at quantity one does not touch the cart and
    /// returns [`QuantityChange::RemovalRequested`]. An unknown id is a no-op.
    pub fn change_quantity(&mut self, id: &ProductId, step: Step) -> QuantityChange {
        let Some(line) = self.line_mut(id) else {
            return QuantityChange::NotFound;
        };

        let next = match step {
            Step::Increment => line.quantity.increment(),
            Step::Decrement => match line.quantity.decrement() {
                Some(quantity) => quantity,
                None => return QuantityChange::RemovalRequested,
            },
        };

        line.quantity = next;
        QuantityChange::Updated(next)
    }

    /// Remove the line with `id`, returning it if it was present.
    ///
    /// Removing an absent id is a no-op, so repeated calls are harmless.
    pub fn remove_item(&mut self, id: &ProductId) -> Option<CartLineItem> {
        let index = self.lines.iter().position(|line| &line.id == id)?;
        Some(self.lines.remove(index))
    }

    /// Sum of every line's subtotal; zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLineItem::subtotal).sum()
    }

    /// Sum of every line's quantity; zero for an empty cart.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity.get()))
            .sum()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Take every line out, leaving the cart empty.
    pub fn drain(&mut self) -> Vec<CartLineItem> {
        std::mem::take(&mut self.lines)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    fn item(s: &str, price: u32) -> CatalogItem {
        CatalogItem::new(id(s), format!("Item {s}"), Price::from_units(price), ImageRef::default())
    }

    fn cart_with(lines: &[(&str, u32, u32)]) -> Cart {
        let mut cart = Cart::new();
        for &(s, price, quantity) in lines {
            cart.add_or_increment(&item(s, price), qty(quantity));
        }
        cart
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_or_increment(&item("1", 35), qty(2)), qty(2));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total(), Price::from_units(70));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_existing_adds_chosen_quantity() {
        let mut cart = cart_with(&[("1", 35, 2)]);
        assert_eq!(cart.add_or_increment(&item("1", 35), qty(3)), qty(5));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, qty(5));
    }

    #[test]
    fn test_add_preserves_first_added_order() {
        let mut cart = cart_with(&[("2", 500, 1), ("1", 35, 1)]);
        cart.add_or_increment(&item("2", 500), qty(1));

        let ids: Vec<_> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[test]
    fn test_line_copies_catalog_fields() {
        let catalog_item = CatalogItem::new(
            id("9"),
            "C2 APPLE",
            Price::from_units(40),
            ImageRef::new("assets/apple.webp"),
        );
        let mut cart = Cart::new();
        cart.add_or_increment(&catalog_item, Quantity::ONE);
        let line = cart.line(&id("9")).unwrap();

        assert_eq!(line.name, "C2 APPLE");
        assert_eq!(line.unit_price, Price::from_units(40));
        assert_eq!(line.image.as_str(), "assets/apple.webp");
    }

    #[test]
    fn test_increment() {
        let mut cart = cart_with(&[("1", 35, 1)]);
        assert_eq!(
            cart.change_quantity(&id("1"), Step::Increment),
            QuantityChange::Updated(qty(2))
        );
        assert_eq!(cart.total(), Price::from_units(70));
    }

    #[test]
    fn test_decrement_above_one() {
        let mut cart = cart_with(&[("1", 35, 3)]);
        assert_eq!(
            cart.change_quantity(&id("1"), Step::Decrement),
            QuantityChange::Updated(qty(2))
        );
    }

    #[test]
    fn test_decrement_at_one_requests_removal() {
        let mut cart = cart_with(&[("1", 35, 1)]);
        let before = cart.clone();

        assert_eq!(
            cart.change_quantity(&id("1"), Step::Decrement),
            QuantityChange::RemovalRequested
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_change_unknown_is_noop() {
        let mut cart = cart_with(&[("1", 35, 1)]);
        let before = cart.clone();

        assert_eq!(
            cart.change_quantity(&id("7"), Step::Increment),
            QuantityChange::NotFound
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = cart_with(&[("1", 35, 1), ("2", 500, 2)]);
        let removed = cart.remove_item(&id("1")).unwrap();

        assert_eq!(removed.id, id("1"));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total(), Price::from_units(1000));
        assert!(cart.remove_item(&id("1")).is_none());
    }

    #[test]
    fn test_empty_cart_aggregates() {
        let cart = Cart::new();
        assert!(cart.total().is_zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut cart = cart_with(&[("2", 500, 3)]);
        cart.clear();

        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_drain_returns_lines() {
        let mut cart = cart_with(&[("1", 35, 1), ("2", 500, 1)]);
        let lines = cart.drain();

        assert_eq!(lines.len(), 2);
        assert!(cart.is_empty());
    }

    fn op_strategy() -> impl Strategy<Value = (u8, u8, u32)> {
        (0u8..4, 0u8..4, 1u32..20)
    }

    proptest! {
        #[test]
        fn repeated_adds_sum_into_one_line(quantities in prop::collection::vec(1u32..1000, 1..20)) {
            let mut cart = Cart::new();
            let red = item("1", 35);
            for &n in &quantities {
                cart.add_or_increment(&red, qty(n));
            }

            let expected: u32 = quantities.iter().sum();
            prop_assert_eq!(cart.lines().len(), 1);
            prop_assert_eq!(cart.lines()[0].quantity.get(), expected);
        }

        #[test]
        fn invariants_hold_for_any_sequence(ops in prop::collection::vec(op_strategy(), 0..50)) {
            let mut cart = Cart::new();
            for (kind, which, n) in ops {
                let target = which.to_string();
                match kind {
                    0 => { cart.add_or_increment(&item(&target, u32::from(which) * 10), qty(n)); }
                    1 => { cart.change_quantity(&id(&target), Step::Increment); }
                    2 => { cart.change_quantity(&id(&target), Step::Decrement); }
                    _ => { cart.remove_item(&id(&target)); }
                }

                let mut ids: Vec<_> = cart.lines().iter().map(|l| l.id.clone()).collect();
                ids.sort();
                ids.dedup();
                prop_assert_eq!(ids.len(), cart.lines().len());
                prop_assert!(cart.lines().iter().all(|l| l.quantity.get() >= 1));

                let expected: Price = cart
                    .lines()
                    .iter()
                    .map(|l| l.unit_price * l.quantity)
                    .sum();
                prop_assert_eq!(cart.total(), expected);
            }
        }

        #[test]
        fn clear_empties_any_cart(lines in prop::collection::vec((0u8..5, 1u32..50), 0..20)) {
            let mut cart = Cart::new();
            for (which, n) in lines {
                cart.add_or_increment(&item(&which.to_string(), u32::from(which) * 35), qty(n));
            }

            cart.clear();

            prop_assert!(cart.is_empty());
            prop_assert_eq!(cart.item_count(), 0);
            prop_assert!(cart.total().is_zero());
        }

        #[test]
        fn remove_is_idempotent(lines in prop::collection::vec((0u8..5, 1u32..5), 0..10), target in 0u8..5) {
            let mut cart = Cart::new();
            for (which, n) in lines {
                cart.add_or_increment(&item(&which.to_string(), 10), qty(n));
            }
            let target = id(&target.to_string());

            let mut once = cart.clone();
            once.remove_item(&target);
            let mut twice = once.clone();
            twice.remove_item(&target);

            prop_assert_eq!(once, twice);
        }
    }
}
