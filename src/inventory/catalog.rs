//! Product catalog
//!
//! Products keyed by id, kept in registration order so listings and reports
//! are stable. Quantity mutation is crate-private: only the inventory
//! manager's movement path may adjust stock.

use crate::error::{EstoqueError, EstoqueResult};
use crate::models::{Product, ProductId};

/// The set of registered products
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a catalog from a snapshot
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Register a product
    ///
    /// Fails with `DuplicateProduct` if the id is already used; the catalog
    /// is left unchanged in that case. Category existence is the manager's
    /// concern and is checked before delegation.
    pub fn register(&mut self, product: Product) -> EstoqueResult<()> {
        if self.get(product.id).is_some() {
            return Err(EstoqueError::DuplicateProduct { id: product.id });
        }
        self.products.push(product);
        Ok(())
    }

    /// Look up a product by id
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, in registration order
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of registered products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Apply a signed quantity delta to a product.
    ///
    /// Manager-only: the caller pre-validates that an outflow never drives
    /// the quantity negative. Unknown ids are ignored.
    pub(crate) fn adjust_quantity(&mut self, id: ProductId, delta: i64) {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == id) {
            if delta >= 0 {
                product.quantity += delta as u64;
            } else {
                product.quantity -= delta.unsigned_abs();
            }
        }
    }
}
