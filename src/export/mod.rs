//! Export module for budgets-cli
//!
//! Whole-database export to JSON and the matching import reader.

pub mod json;

pub use json::{
    default_export_file_name, export_json, export_to_file, import_from_json, DataExport,
    ImportRejection, EXPORT_SCHEMA_VERSION,
};
