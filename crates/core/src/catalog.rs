//! The read-only product catalog.
//!
//! A [`Catalog`] is built once at startup, either from the built-in default
//! range or from a configuration file parsed by the caller, and is never
//! mutated afterwards.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// Opaque handle to a product image asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wrap an asset reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A purchasable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub image: ImageRef,
}

impl CatalogItem {
    /// Create a catalog item.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, unit_price: Price, image: ImageRef) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            image,
        }
    }
}

/// Errors raised while building a [`Catalog`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no items.
    #[error("catalog must contain at least one item")]
    Empty,
    /// One or more items failed validation.
    #[error("{} catalog validation error(s): {}", .0.len(), .0.join("; "))]
    Invalid(Vec<String>),
}

/// One entry of a catalog file, before validation.
///
/// The price is a plain decimal so that a negative amount is reported by
/// [`validate_entries`] alongside every other problem instead of aborting
/// the parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub image: ImageRef,
}

/// Check a list of catalog file entries, returning every problem found.
///
/// An empty result means the entries can be turned into a [`Catalog`] with
/// [`Catalog::from_entries`].
#[must_use]
pub fn validate_entries(entries: &[CatalogEntry]) -> Vec<String> {
    let mut errors = check_ids_and_names(entries.iter().map(|e| (&e.id, e.name.as_str())));

    for entry in entries {
        if Price::new(entry.price).is_err() {
            errors.push(format!(
                "Negative price for product '{}': {}",
                entry.id, entry.price
            ));
        }
    }

    errors
}

fn validate_items(items: &[CatalogItem]) -> Vec<String> {
    check_ids_and_names(items.iter().map(|i| (&i.id, i.name.as_str())))
}

fn check_ids_and_names<'a>(rows: impl Iterator<Item = (&'a ProductId, &'a str)>) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, (id, name)) in rows.enumerate() {
        if !seen.insert(id) {
            errors.push(format!("Duplicate product id '{id}' at index {i}"));
        }

        if name.trim().is_empty() {
            errors.push(format!("Empty name for product '{id}'"));
        }
    }

    errors
}

/// The static list of purchasable items, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog from a list of items.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] for an empty list and
    /// [`CatalogError::Invalid`] listing every duplicate id or blank name.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let errors = validate_items(&items);
        if !errors.is_empty() {
            return Err(CatalogError::Invalid(errors));
        }

        Ok(Self { items })
    }

    /// Build a catalog from catalog file entries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] for an empty list and
    /// [`CatalogError::Invalid`] listing every duplicate id, blank name and
    /// negative price.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let errors = validate_entries(&entries);
        if !errors.is_empty() {
            return Err(CatalogError::Invalid(errors));
        }

        let items = entries
            .into_iter()
            .map(|entry| -> Result<CatalogItem, CatalogError> {
                let unit_price = Price::new(entry.price)
                    .map_err(|e| CatalogError::Invalid(vec![e.to_string()]))?;
                Ok(CatalogItem::new(entry.id, entry.name, unit_price, entry.image))
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Self { items })
    }

    /// All items in display order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; a catalog holds at least one item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    /// The shop's built-in range of C2 iced teas.
    fn default() -> Self {
        let item = |id: &str, name: &str, price: u32, image: &str| CatalogItem {
            id: ProductId::from_trusted(id),
            name: name.to_owned(),
            unit_price: Price::from_units(price),
            image: ImageRef::new(image),
        };

        Self {
            items: vec![
                item("1", "C2 RED", 35, "assets/c2red.webp"),
                item("2", "C2 GREEN", 500, "assets/c2green.webp"),
                item("3", "C2 YELLOW", 500, "assets/c2yellow.webp"),
            ],
        }
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<CatalogEntry>::deserialize(deserializer)?;
        Self::from_entries(entries).map_err(serde::de::Error::custom)
    }
}
