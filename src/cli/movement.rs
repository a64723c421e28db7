//! Movement CLI commands

use clap::Subcommand;

use crate::display::format_movement_list;
use crate::error::EstoqueResult;
use crate::inventory::InventoryManager;
use crate::models::{MovementKind, ProductId};

/// Movement subcommands
#[derive(Subcommand)]
pub enum MovementCommands {
    /// Record a stock movement
    Record {
        /// Product id
        product_id: ProductId,
        /// Movement kind: 'entrada' (inflow) or 'saida' (outflow)
        kind: MovementKind,
        /// Number of units moved
        quantity: u64,
    },

    /// List all recorded movements (in ledger order)
    List,
}

/// Handle a movement command
pub fn handle_movement_command(
    manager: &mut InventoryManager,
    cmd: MovementCommands,
) -> EstoqueResult<()> {
    match cmd {
        MovementCommands::Record {
            product_id,
            kind,
            quantity,
        } => {
            manager.record_movement(product_id, kind, quantity)?;
            println!(
                "Recorded {} of {} unit(s) for product {}.",
                kind.token(),
                quantity,
                product_id
            );
            if let Some(product) = manager.get_product(product_id) {
                println!("  New quantity: {}", product.quantity);
            }
        }

        MovementCommands::List => {
            print!("{}", format_movement_list(manager.list_movements()));
        }
    }

    Ok(())
}
