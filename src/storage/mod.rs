//! Storage layer for estoque-cli
//!
//! Persists the inventory snapshot as a JSON file with atomic writes, so the
//! CLI adapter keeps its state between invocations. The core manager stays
//! I/O-free; this layer only moves snapshots in and out.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::EstoquePaths;
use crate::error::EstoqueResult;
use crate::inventory::{InventoryManager, InventorySnapshot};

/// Snapshot persistence for the CLI adapter
pub struct Storage {
    paths: EstoquePaths,
}

impl Storage {
    /// Create a new Storage instance, ensuring directories exist
    pub fn new(paths: EstoquePaths) -> EstoqueResult<Self> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &EstoquePaths {
        &self.paths
    }

    /// Load the persisted snapshot into a manager
    ///
    /// A missing snapshot file yields an empty inventory.
    pub fn load(&self) -> EstoqueResult<InventoryManager> {
        let snapshot: InventorySnapshot = read_json(self.paths.inventory_file())?;
        Ok(InventoryManager::from_snapshot(snapshot))
    }

    /// Save the manager's state back to disk
    pub fn save(&self, manager: &InventoryManager) -> EstoqueResult<()> {
        write_json_atomic(self.paths.inventory_file(), &manager.snapshot())
    }
}
