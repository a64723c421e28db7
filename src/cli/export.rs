//! CLI commands for report export

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{EstoqueError, EstoqueResult};
use crate::export::{
    export_full_json, export_movements_to_path, export_products_to_path, ExportOutcome,
    MOVEMENTS_REPORT_FILE, PRODUCTS_REPORT_FILE,
};
use crate::inventory::InventoryManager;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the products report to CSV
    Products {
        /// Output file path (defaults to relatorio_produtos.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the movements report to CSV
    Movements {
        /// Output file path (defaults to relatorio_movimentacoes.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the full inventory to JSON
    Json {
        /// Output file path
        output: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show export information without writing files
    Info,
}

/// Handle export commands
pub fn handle_export_command(manager: &InventoryManager, cmd: ExportCommands) -> EstoqueResult<()> {
    match cmd {
        ExportCommands::Products { output } => {
            let path = output.unwrap_or_else(|| PathBuf::from(PRODUCTS_REPORT_FILE));
            match export_products_to_path(manager, &path)? {
                ExportOutcome::Written { rows } => {
                    println!("Products report exported to: {} ({} rows)", path.display(), rows);
                }
                ExportOutcome::NothingToExport => {
                    println!("No products to export.");
                }
            }
        }

        ExportCommands::Movements { output } => {
            let path = output.unwrap_or_else(|| PathBuf::from(MOVEMENTS_REPORT_FILE));
            match export_movements_to_path(manager, &path)? {
                ExportOutcome::Written { rows } => {
                    println!(
                        "Movements report exported to: {} ({} rows)",
                        path.display(),
                        rows
                    );
                }
                ExportOutcome::NothingToExport => {
                    println!("No movements to export.");
                }
            }
        }

        ExportCommands::Json { output, pretty } => {
            let file = File::create(&output).map_err(|e| {
                EstoqueError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            export_full_json(manager, &mut writer, pretty)?;
            println!("Full inventory exported to: {}", output.display());
        }

        ExportCommands::Info => {
            println!("Export information");
            println!("==================");
            println!("Categories: {}", manager.list_categories().len());
            println!("Products:   {}", manager.list_products().len());
            println!("Movements:  {}", manager.list_movements().len());
            println!();
            println!("Default report files:");
            println!("  {}", PRODUCTS_REPORT_FILE);
            println!("  {}", MOVEMENTS_REPORT_FILE);
        }
    }

    Ok(())
}
