//! Inventory manager
//!
//! The orchestration core: validates registrations against the registry and
//! catalog, mutates quantities exclusively through the movement path, and
//! appends to the ledger. Every operation either completes fully or leaves
//! all three stores untouched.

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::error::{EstoqueError, EstoqueResult};
use crate::models::{Category, Movement, MovementKind, Price, Product, ProductId};

use super::catalog::ProductCatalog;
use super::ledger::MovementLedger;
use super::registry::CategoryRegistry;

/// A serializable copy of the full inventory state
///
/// Used by the storage adapter to persist state between CLI invocations and
/// by the JSON export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub movements: Vec<Movement>,
}

/// The orchestrating component enforcing all cross-entity invariants
///
/// Owns the category registry, product catalog, and movement ledger for its
/// lifetime; no external component mutates them directly. Construct one per
/// adapter and pass it to handlers; there is no global instance.
pub struct InventoryManager {
    registry: CategoryRegistry,
    catalog: ProductCatalog,
    ledger: MovementLedger,
    clock: Box<dyn Clock>,
}

impl InventoryManager {
    /// Create an empty manager stamped by the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an empty manager with an injected time source
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            registry: CategoryRegistry::new(),
            catalog: ProductCatalog::new(),
            ledger: MovementLedger::new(),
            clock: Box::new(clock),
        }
    }

    /// Rebuild a manager from a persisted snapshot, using the system clock
    pub fn from_snapshot(snapshot: InventorySnapshot) -> Self {
        Self::from_snapshot_with_clock(snapshot, SystemClock)
    }

    /// Rebuild a manager from a persisted snapshot with an injected clock
    pub fn from_snapshot_with_clock(
        snapshot: InventorySnapshot,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            registry: CategoryRegistry::from_categories(snapshot.categories),
            catalog: ProductCatalog::from_products(snapshot.products),
            ledger: MovementLedger::from_movements(snapshot.movements),
            clock: Box::new(clock),
        }
    }

    /// Copy the full state out for persistence or export
    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            categories: self.registry.all().to_vec(),
            products: self.catalog.all().to_vec(),
            movements: self.ledger.all().to_vec(),
        }
    }

    /// Register a new category
    ///
    /// The name is trimmed; an empty name is a validation error. Surfaces
    /// `DuplicateCategory` from the registry unchanged.
    pub fn register_category(&mut self, name: &str) -> EstoqueResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EstoqueError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        self.registry.register(Category::new(name))
    }

    /// Register a new product
    ///
    /// The category must already exist (`CategoryNotFound`) and the id must
    /// be unused (`DuplicateProduct`). A failed registration never partially
    /// inserts the product.
    pub fn register_product(
        &mut self,
        id: ProductId,
        name: &str,
        category: &str,
        quantity: u64,
        price: Price,
    ) -> EstoqueResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EstoqueError::Validation(
                "Product name cannot be empty".into(),
            ));
        }

        let category = category.trim();
        if !self.registry.exists(category) {
            return Err(EstoqueError::category_not_found(category));
        }

        self.catalog
            .register(Product::new(id, name, category, quantity, price))
    }

    /// Record a stock movement
    ///
    /// This is the only path that mutates a product's quantity, so the
    /// quantity on hand always equals the initially registered quantity plus
    /// the net sum of recorded movements. A rejected movement leaves both
    /// the catalog and the ledger untouched.
    pub fn record_movement(
        &mut self,
        product_id: ProductId,
        kind: MovementKind,
        quantity: u64,
    ) -> EstoqueResult<()> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or(EstoqueError::ProductNotFound { id: product_id })?;

        if kind == MovementKind::Outflow && quantity > product.quantity {
            return Err(EstoqueError::InsufficientStock {
                id: product_id,
                requested: quantity,
                available: product.quantity,
            });
        }

        let delta = match kind {
            MovementKind::Inflow => quantity as i64,
            MovementKind::Outflow => -(quantity as i64),
        };
        self.catalog.adjust_quantity(product_id, delta);

        self.ledger
            .append(Movement::new(product_id, kind, quantity, self.clock.now()));

        Ok(())
    }

    /// Look up a product by id
    pub fn get_product(&self, id: ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    /// All products, in registration order
    pub fn list_products(&self) -> &[Product] {
        self.catalog.all()
    }

    /// All categories, in registration order
    pub fn list_categories(&self) -> &[Category] {
        self.registry.all()
    }

    /// All movements, in the order they were recorded
    pub fn list_movements(&self) -> &[Movement] {
        self.ledger.all()
    }
}

impl Default for InventoryManager {
    fn default() -> Self {
        Self::new()
    }
}
