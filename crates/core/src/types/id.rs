//! Product identifiers.
//!
//! A [`ProductId`] names a catalog item and doubles as the uniqueness key of
//! a cart line, so every lookup in the cart goes through this type rather than
//! a bare string.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input is empty or only whitespace.
    #[error("product id cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("product id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains whitespace.
    #[error("product id cannot contain whitespace")]
    ContainsWhitespace,
}

/// Identifier of a catalog item.
///
/// ## Constraints
///
/// - Length: 1-64 characters after trimming
/// - No interior whitespace (ids are typed at the command prompt)
///
/// ## Examples
///
/// ```
/// use pocket_shop_core::ProductId;
///
/// assert!(ProductId::parse("1").is_ok());
/// assert!(ProductId::parse(" c2-red ").is_ok());
///
/// assert!(ProductId::parse("").is_err());
/// assert!(ProductId::parse("c2 red").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Maximum length of a product id.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `ProductId` from a string, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, longer than
    /// [`Self::MAX_LENGTH`], or contains whitespace.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(IdError::Empty);
        }

        if s.chars().count() > Self::MAX_LENGTH {
            return Err(IdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(IdError::ContainsWhitespace);
        }

        Ok(Self(s.to_owned()))
    }

    /// Wrap an id known to be valid, such as one from a built-in table.
    pub(crate) fn from_trusted(s: &str) -> Self {
        debug_assert!(Self::parse(s).is_ok(), "invalid built-in product id {s:?}");
        Self(s.to_owned())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProductId {
    type Error = IdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
