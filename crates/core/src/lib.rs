//! Pocket Shop Core - Catalog and cart domain model.
//!
//! This crate holds everything about the shop that is not presentation. It is
//! used by:
//! - `storefront` - Session, screens, and text rendering built on these types
//! - `cli` - The `pocket-shop` binary that drives a storefront session
//!
//! # Architecture
//!
//! The core crate contains only types and the operations on them - no I/O,
//! no logging, no configuration loading. All cart mutation goes through
//! [`Cart`]'s methods, which keep the cart's invariants after every call.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product ids, prices, and quantities
//! - [`catalog`] - The read-only list of purchasable items
//! - [`cart`] - Cart lines, quantity changes, removal, and totals
//! - [`selection`] - The add-to-cart quantity picker
//! - [`flow`] - Confirm/cancel state machines for checkout and removal

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod flow;
pub mod selection;
pub mod types;

pub use cart::{Cart, CartLineItem, QuantityChange, Step};
pub use catalog::{Catalog, CatalogEntry, CatalogError, CatalogItem, ImageRef, validate_entries};
pub use flow::{CheckoutError, CheckoutFlow, Confirmation, Receipt, RemovalFlow};
pub use selection::PendingSelection;
pub use types::*;
