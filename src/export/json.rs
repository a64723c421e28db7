//! JSON Export functionality
//!
//! Exports the complete inventory to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{EstoqueError, EstoqueResult};
use crate::inventory::InventoryManager;
use crate::models::{Category, Movement, Product};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full inventory export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All categories
    pub categories: Vec<Category>,

    /// All products
    pub products: Vec<Product>,

    /// All movements
    pub movements: Vec<Movement>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of categories
    pub category_count: usize,

    /// Total number of products
    pub product_count: usize,

    /// Total number of movements
    pub movement_count: usize,

    /// Timestamp of the first recorded movement
    pub first_movement: Option<String>,

    /// Timestamp of the last recorded movement
    pub last_movement: Option<String>,
}

impl FullExport {
    /// Create a full export from the manager's current state
    pub fn from_manager(manager: &InventoryManager) -> Self {
        let snapshot = manager.snapshot();

        let first_movement = snapshot
            .movements
            .first()
            .map(Movement::formatted_timestamp);
        let last_movement = snapshot.movements.last().map(Movement::formatted_timestamp);

        let metadata = ExportMetadata {
            category_count: snapshot.categories.len(),
            product_count: snapshot.products.len(),
            movement_count: snapshot.movements.len(),
            first_movement,
            last_movement,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            categories: snapshot.categories,
            products: snapshot.products,
            movements: snapshot.movements,
            metadata,
        }
    }
}

/// Export the full inventory to JSON
pub fn export_full_json<W: Write>(
    manager: &InventoryManager,
    writer: &mut W,
    pretty: bool,
) -> EstoqueResult<()> {
    let export = FullExport::from_manager(manager);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
            .map_err(|e| EstoqueError::Export(e.to_string()))?;
    } else {
        serde_json::to_writer(writer, &export)
            .map_err(|e| EstoqueError::Export(e.to_string()))?;
    }

    Ok(())
}
