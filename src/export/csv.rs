//! CSV report export
//!
//! Writes the products and movements reports in the exact shape the original
//! report consumers expect: Portuguese headers, `entrada`/`saida` kind
//! tokens, `YYYY-MM-DD HH:MM:SS` timestamps, CRLF row terminators, and
//! minimal quoting.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{Terminator, WriterBuilder};

use crate::error::{EstoqueError, EstoqueResult};
use crate::inventory::InventoryManager;

/// Default file name for the products report
pub const PRODUCTS_REPORT_FILE: &str = "relatorio_produtos.csv";

/// Default file name for the movements report
pub const MOVEMENTS_REPORT_FILE: &str = "relatorio_movimentacoes.csv";

/// Result of a report export
///
/// Exporting an empty catalog/ledger performs no file write at all and
/// reports `NothingToExport` instead of producing an empty file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The report was written with this many data rows
    Written { rows: usize },
    /// There was nothing to export; no file was created or touched
    NothingToExport,
}

/// Export all products to CSV, in catalog order
///
/// Returns the number of data rows written.
pub fn export_products_csv<W: Write>(
    manager: &InventoryManager,
    writer: &mut W,
) -> EstoqueResult<usize> {
    let mut csv_writer = report_writer(writer);

    csv_writer
        .write_record(["ID", "Nome", "Categoria", "Quantidade", "Preço"])
        .map_err(|e| EstoqueError::Export(e.to_string()))?;

    let products = manager.list_products();
    for product in products {
        csv_writer
            .write_record([
                product.id.to_string(),
                product.name.clone(),
                product.category.clone(),
                product.quantity.to_string(),
                product.price.to_string(),
            ])
            .map_err(|e| EstoqueError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| EstoqueError::Export(e.to_string()))?;

    Ok(products.len())
}

/// Export all movements to CSV, in ledger order
///
/// Returns the number of data rows written.
pub fn export_movements_csv<W: Write>(
    manager: &InventoryManager,
    writer: &mut W,
) -> EstoqueResult<usize> {
    let mut csv_writer = report_writer(writer);

    csv_writer
        .write_record(["Produto ID", "Tipo", "Quantidade", "Data"])
        .map_err(|e| EstoqueError::Export(e.to_string()))?;

    let movements = manager.list_movements();
    for movement in movements {
        csv_writer
            .write_record([
                movement.product_id.to_string(),
                movement.kind.token().to_string(),
                movement.quantity.to_string(),
                movement.formatted_timestamp(),
            ])
            .map_err(|e| EstoqueError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| EstoqueError::Export(e.to_string()))?;

    Ok(movements.len())
}

/// Write the products report to a file, honoring the empty-set rule
pub fn export_products_to_path(
    manager: &InventoryManager,
    path: &Path,
) -> EstoqueResult<ExportOutcome> {
    if manager.list_products().is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }

    let mut writer = create_report_file(path)?;
    let rows = export_products_csv(manager, &mut writer)?;
    Ok(ExportOutcome::Written { rows })
}

/// Write the movements report to a file, honoring the empty-set rule
pub fn export_movements_to_path(
    manager: &InventoryManager,
    path: &Path,
) -> EstoqueResult<ExportOutcome> {
    if manager.list_movements().is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }

    let mut writer = create_report_file(path)?;
    let rows = export_movements_csv(manager, &mut writer)?;
    Ok(ExportOutcome::Written { rows })
}

/// CSV writer tuned to the report dialect the original files used
fn report_writer<W: Write>(writer: &mut W) -> csv::Writer<&mut W> {
    WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer)
}

fn create_report_file(path: &Path) -> EstoqueResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        EstoqueError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{MovementKind, Price, ProductId};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn populated_manager() -> InventoryManager {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 14, 30, 5).unwrap();
        let mut m = InventoryManager::with_clock(FixedClock(ts));
        m.register_category("Bebidas").unwrap();
        m.register_product(ProductId::new(1), "Suco", "Bebidas", 10, Price::from_cents(350))
            .unwrap();
        m.record_movement(ProductId::new(1), MovementKind::Inflow, 5)
            .unwrap();
        m.record_movement(ProductId::new(1), MovementKind::Outflow, 2)
            .unwrap();
        m
    }

    #[test]
    fn test_products_report_shape() {
        let manager = populated_manager();

        let mut output = Vec::new();
        let rows = export_products_csv(&manager, &mut output).unwrap();
        assert_eq!(rows, 1);

        let csv_string = String::from_utf8(output).unwrap();
        assert_eq!(
            csv_string,
            "ID,Nome,Categoria,Quantidade,Preço\r\n1,Suco,Bebidas,13,3.50\r\n"
        );
    }

    #[test]
    fn test_movements_report_shape() {
        let manager = populated_manager();

        let mut output = Vec::new();
        let rows = export_movements_csv(&manager, &mut output).unwrap();
        assert_eq!(rows, 2);

        let csv_string = String::from_utf8(output).unwrap();
        assert_eq!(
            csv_string,
            "Produto ID,Tipo,Quantidade,Data\r\n\
             1,entrada,5,2024-06-01 14:30:05\r\n\
             1,saida,2,2024-06-01 14:30:05\r\n"
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut manager = InventoryManager::with_clock(FixedClock(ts));
        manager.register_category("Doces, Salgados").unwrap();
        manager
            .register_product(
                ProductId::new(1),
                "Bolo \"caseiro\"",
                "Doces, Salgados",
                1,
                Price::from_cents(100),
            )
            .unwrap();

        let mut output = Vec::new();
        export_products_csv(&manager, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert!(csv_string.contains("\"Bolo \"\"caseiro\"\"\""));
        assert!(csv_string.contains("\"Doces, Salgados\""));
    }

    #[test]
    fn test_empty_catalog_writes_nothing() {
        let manager = InventoryManager::new();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(PRODUCTS_REPORT_FILE);

        let outcome = export_products_to_path(&manager, &path).unwrap();
        assert_eq!(outcome, ExportOutcome::NothingToExport);
        assert!(!path.exists());
    }

    #[test]
    fn test_empty_ledger_writes_nothing() {
        let manager = InventoryManager::new();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(MOVEMENTS_REPORT_FILE);

        let outcome = export_movements_to_path(&manager, &path).unwrap();
        assert_eq!(outcome, ExportOutcome::NothingToExport);
        assert!(!path.exists());
    }

    #[test]
    fn test_export_to_path_writes_file() {
        let manager = populated_manager();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(MOVEMENTS_REPORT_FILE);

        let outcome = export_movements_to_path(&manager, &path).unwrap();
        assert_eq!(outcome, ExportOutcome::Written { rows: 2 });

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Produto ID,Tipo,Quantidade,Data\r\n"));
    }
}
