//! Product model
//!
//! Products are keyed by a caller-supplied integer id and reference their
//! category by name. The quantity on hand is only ever mutated through the
//! inventory manager's movement path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::price::Price;

/// Strongly-typed product identifier
///
/// A newtype over the caller-supplied integer id, so product ids cannot be
/// mixed up with raw quantities at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create a product id from its integer value
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying integer value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A stocked item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Name of the category this product belongs to
    pub category: String,

    /// Quantity currently on hand
    pub quantity: u64,

    /// Unit price
    pub price: Price,
}

impl Product {
    /// Create a new product
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u64,
        price: Price,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            quantity,
            price,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
