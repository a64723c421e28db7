//! Product CLI commands

use clap::Subcommand;

use crate::display::{format_product_details, format_product_list};
use crate::error::{EstoqueError, EstoqueResult};
use crate::inventory::InventoryManager;
use crate::models::{Price, ProductId};

/// Product subcommands
#[derive(Subcommand)]
pub enum ProductCommands {
    /// Register a new product
    Add {
        /// Product id (integer)
        id: ProductId,
        /// Product name
        name: String,
        /// Category name (must already be registered)
        #[arg(short, long)]
        category: String,
        /// Initial quantity on hand
        #[arg(short, long, default_value = "0")]
        quantity: u64,
        /// Unit price (e.g. "3.50")
        #[arg(short, long, default_value = "0")]
        price: Price,
    },

    /// List all products (in registration order)
    List,

    /// Show product details
    Show {
        /// Product id
        id: ProductId,
    },
}

/// Handle a product command
pub fn handle_product_command(
    manager: &mut InventoryManager,
    cmd: ProductCommands,
) -> EstoqueResult<()> {
    match cmd {
        ProductCommands::Add {
            id,
            name,
            category,
            quantity,
            price,
        } => {
            manager.register_product(id, &name, &category, quantity, price)?;
            println!("Registered product: {}", name.trim());
            println!("  ID:       {}", id);
            println!("  Category: {}", category.trim());
        }

        ProductCommands::List => {
            print!("{}", format_product_list(manager.list_products()));
        }

        ProductCommands::Show { id } => {
            let product = manager
                .get_product(id)
                .ok_or(EstoqueError::ProductNotFound { id })?;
            print!("{}", format_product_details(product));
        }
    }

    Ok(())
}
