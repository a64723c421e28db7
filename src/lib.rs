//! estoque-cli - Terminal-based inventory and stock movement tracker
//!
//! This library provides the core functionality for the estoque-cli
//! application: products grouped into categories, stock levels adjusted by
//! inflow/outflow movements, and exportable CSV reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (categories, products, movements, prices)
//! - `clock`: Injectable time source for movement timestamps
//! - `inventory`: The business core (registry, catalog, ledger, manager)
//! - `storage`: JSON snapshot persistence for the CLI adapter
//! - `export`: CSV reports and full JSON dump
//! - `display`: Terminal table formatting
//! - `cli`: clap subcommand handlers
//!
//! # Example
//!
//! ```rust
//! use estoque::inventory::InventoryManager;
//! use estoque::models::{MovementKind, Price, ProductId};
//!
//! let mut manager = InventoryManager::new();
//! manager.register_category("Bebidas")?;
//! manager.register_product(ProductId::new(1), "Suco", "Bebidas", 10, Price::from_cents(350))?;
//! manager.record_movement(ProductId::new(1), MovementKind::Inflow, 5)?;
//! assert_eq!(manager.get_product(ProductId::new(1)).unwrap().quantity, 15);
//! # Ok::<(), estoque::EstoqueError>(())
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod inventory;
pub mod models;
pub mod storage;

pub use error::{EstoqueError, EstoqueResult};
