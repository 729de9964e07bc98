//! Export module for Splitly
//!
//! Provides group report export in multiple formats:
//! - CSV: expenses and recorded settlements (spreadsheet-compatible)
//! - JSON: machine-readable report with schema version
//! - YAML: human-readable report

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, export_settlements_csv};
pub use json::{export_group_json, GroupExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_group_yaml;
