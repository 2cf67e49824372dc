//! Export module for spendlens
//!
//! - JSON: the dashboard, machine-readable
//! - YAML: the dashboard, human-readable
//! - CSV: the transaction list, spreadsheet-compatible

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_transactions_csv;
pub use json::{export_dashboard_json, DashboardExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_dashboard_yaml;
