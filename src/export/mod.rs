//! Export module for estoque-cli
//!
//! Provides the two CSV reports (products and movements) consumed by
//! existing spreadsheet tooling, plus a machine-readable full JSON dump.

pub mod csv;
pub mod json;

pub use csv::{
    export_movements_csv, export_movements_to_path, export_products_csv, export_products_to_path,
    ExportOutcome, MOVEMENTS_REPORT_FILE, PRODUCTS_REPORT_FILE,
};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
