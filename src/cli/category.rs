//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::EstoqueResult;
use crate::inventory::InventoryManager;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Register a new category
    Add {
        /// Category name
        name: String,
    },

    /// List all categories (in registration order)
    List,
}

/// Handle a category command
pub fn handle_category_command(
    manager: &mut InventoryManager,
    cmd: CategoryCommands,
) -> EstoqueResult<()> {
    match cmd {
        CategoryCommands::Add { name } => {
            manager.register_category(&name)?;
            println!("Registered category: {}", name.trim());
        }

        CategoryCommands::List => {
            print!("{}", format_category_list(manager.list_categories()));
        }
    }

    Ok(())
}
