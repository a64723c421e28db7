//! Category registry
//!
//! A flat, insertion-ordered set of category names. Categories are never
//! renamed or deleted, so the registry only ever grows.

use crate::error::{EstoqueError, EstoqueResult};
use crate::models::Category;

/// The set of registered categories
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from a snapshot
    pub fn from_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Register a category
    ///
    /// Fails with `DuplicateCategory` if the name is already present; the
    /// registry is left unchanged in that case.
    pub fn register(&mut self, category: Category) -> EstoqueResult<()> {
        if self.exists(&category.name) {
            return Err(EstoqueError::DuplicateCategory {
                name: category.name,
            });
        }
        self.categories.push(category);
        Ok(())
    }

    /// Check whether a category name is registered
    pub fn exists(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    /// All categories, in registration order
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    /// Number of registered categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
