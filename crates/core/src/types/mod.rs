//! Value types for Pocket Shop.
//!
//! This module provides type-safe wrappers for the domain's primitive
//! concepts so that invalid ids, negative prices, and zero quantities are
//! rejected at the boundary instead of inside the cart.

pub mod id;
pub mod price;
pub mod quantity;

pub use id::{IdError, ProductId};
pub use price::{Price, PriceError};
pub use quantity::{Quantity, QuantityError};
