//! Export module for the expense tracker
//!
//! Session data is never written to disk on its own; these exporters write
//! to any `Write` the caller supplies:
//! - CSV: the expense list (spreadsheet-compatible)
//! - JSON: a full machine-readable session snapshot
//! - YAML: the same snapshot, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_session_json, ExportTotals, SessionExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_session_yaml;
