//! Path management for estoque-cli
//!
//! Provides XDG-compliant path resolution for the data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `ESTOQUE_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/estoque-cli` or `~/.config/estoque-cli`
//! 3. Windows: `%APPDATA%\estoque-cli`

use std::path::{Path, PathBuf};

use crate::error::EstoqueError;

/// Manages all paths used by estoque-cli
#[derive(Debug, Clone)]
pub struct EstoquePaths {
    /// Base directory for all estoque-cli data
    base_dir: PathBuf,
}

impl EstoquePaths {
    /// Create a new EstoquePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, EstoqueError> {
        let base_dir = if let Ok(custom) = std::env::var("ESTOQUE_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create EstoquePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/estoque-cli/ or equivalent)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the data directory (~/.config/estoque-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to inventory.json (the persisted snapshot)
    pub fn inventory_file(&self) -> PathBuf {
        self.data_dir().join("inventory.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), EstoqueError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EstoqueError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| EstoqueError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, EstoqueError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| EstoqueError::Io("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("estoque-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, EstoqueError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| EstoqueError::Io("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("estoque-cli"))
}
