//! Custom error types for estoque-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::ProductId;

/// The main error type for estoque-cli operations
#[derive(Error, Debug)]
pub enum EstoqueError {
    /// A category with the same name is already registered
    #[error("Category already exists: {name}")]
    DuplicateCategory { name: String },

    /// A product with the same id is already registered
    #[error("Product already exists: {id}")]
    DuplicateProduct { id: ProductId },

    /// Product registration referenced a category that was never registered
    #[error("Category not found: {name}")]
    CategoryNotFound { name: String },

    /// A movement referenced a product that was never registered
    #[error("Product not found: {id}")]
    ProductNotFound { id: ProductId },

    /// Outflow exceeds the quantity currently on hand
    #[error("Insufficient stock for product {id}: requested {requested}, available {available}")]
    InsufficientStock {
        id: ProductId,
        requested: u64,
        available: u64,
    },

    /// Validation errors for user-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors (snapshot load/save)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl EstoqueError {
    /// Create a "category not found" error
    pub fn category_not_found(name: impl Into<String>) -> Self {
        Self::CategoryNotFound { name: name.into() }
    }

    /// Create a "product not found" error
    pub fn product_not_found(id: ProductId) -> Self {
        Self::ProductNotFound { id }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CategoryNotFound { .. } | Self::ProductNotFound { .. }
        )
    }

    /// Check if this is a duplicate-key error
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Self::DuplicateCategory { .. } | Self::DuplicateProduct { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for EstoqueError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EstoqueError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for estoque-cli operations
pub type EstoqueResult<T> = Result<T, EstoqueError>;
