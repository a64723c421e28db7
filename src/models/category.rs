//! Category model
//!
//! Categories are a flat set of names that products reference. They are
//! created once and never renamed or deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named grouping a product belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, unique within the registry
    pub name: String,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
