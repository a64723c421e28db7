use anyhow::Result;
use clap::{Parser, Subcommand};

use estoque::cli::{
    handle_category_command, handle_export_command, handle_movement_command,
    handle_product_command, CategoryCommands, ExportCommands, MovementCommands, ProductCommands,
};
use estoque::config::paths::EstoquePaths;
use estoque::storage::Storage;

#[derive(Parser)]
#[command(
    name = "estoque",
    version,
    about = "Terminal-based inventory and stock movement tracker",
    long_about = "estoque-cli tracks products grouped into categories, adjusts stock \
                  levels through inflow/outflow movements, and exports the products \
                  and movements reports as CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Product management commands
    #[command(subcommand, alias = "prod")]
    Product(ProductCommands),

    /// Stock movement commands
    #[command(subcommand, alias = "mov")]
    Movement(MovementCommands),

    /// Report export commands
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and storage, then load the persisted inventory
    let paths = EstoquePaths::new()?;
    let storage = Storage::new(paths)?;
    let mut manager = storage.load()?;

    match cli.command {
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut manager, cmd)?;
            storage.save(&manager)?;
        }
        Some(Commands::Product(cmd)) => {
            handle_product_command(&mut manager, cmd)?;
            storage.save(&manager)?;
        }
        Some(Commands::Movement(cmd)) => {
            handle_movement_command(&mut manager, cmd)?;
            storage.save(&manager)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&manager, cmd)?;
        }
        Some(Commands::Config) => {
            println!("estoque-cli Configuration");
            println!("=========================");
            println!("Base directory: {}", storage.paths().base_dir().display());
            println!("Data directory: {}", storage.paths().data_dir().display());
            println!(
                "Inventory file: {}",
                storage.paths().inventory_file().display()
            );
        }
        None => {
            println!("estoque-cli - Terminal-based inventory tracker");
            println!();
            println!("Run 'estoque --help' for usage information.");
        }
    }

    Ok(())
}
