//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the inventory core.

pub mod category;
pub mod export;
pub mod movement;
pub mod product;

pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use movement::{handle_movement_command, MovementCommands};
pub use product::{handle_product_command, ProductCommands};
