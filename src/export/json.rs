//! JSON export and import
//!
//! The file is a JSON object with `budgets` and `expenses` arrays and a
//! `schemaVersion`. Files written before versioning have no version and are
//! read as version 1.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{BudgetsError, BudgetsResult};
use crate::models::{Budget, Expense};
use crate::services::DataSet;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Alert text for files that are not valid exports
pub const PARSE_ERROR_MESSAGE: &str =
    "Could not parse the file. Please confirm what you chose is correct.";

/// Alert text for files written by a newer version
pub const NEWER_VERSION_MESSAGE: &str =
    "This file was exported by a newer version and can't be imported.";

/// Everything written to an export file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataExport {
    pub schema_version: u32,
    pub budgets: Vec<Budget>,
    pub expenses: Vec<Expense>,
}

impl From<DataSet> for DataExport {
    fn from(data: DataSet) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            budgets: data.budgets,
            expenses: data.expenses,
        }
    }
}

/// File name suggested when exporting at `now`
pub fn default_export_file_name(now: DateTime<Utc>) -> String {
    format!("data-export-{}.json", now.format("%Y-%m-%dT%H-%M-%S"))
}

/// Write an export
pub fn export_json<W: Write>(data: &DataExport, writer: &mut W, pretty: bool) -> BudgetsResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, data)
    } else {
        serde_json::to_writer(&mut *writer, data)
    }
    .map_err(|e| BudgetsError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| BudgetsError::Export(e.to_string()))?;
    Ok(())
}

/// Write an export to a file, pretty-printed
pub fn export_to_file(data: &DataExport, path: &Path) -> BudgetsResult<()> {
    let file = File::create(path)
        .map_err(|e| BudgetsError::Export(format!("{}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);
    export_json(data, &mut writer, true)?;
    writer
        .flush()
        .map_err(|e| BudgetsError::Export(e.to_string()))?;
    Ok(())
}

/// Why a file was refused for import
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportRejection {
    /// Not JSON, not an object, or neither `budgets` nor `expenses`
    Unparsable(String),
    /// Written by a newer schema version
    NewerVersion(u32),
}

impl ImportRejection {
    /// Text shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unparsable(_) => PARSE_ERROR_MESSAGE,
            Self::NewerVersion(_) => NEWER_VERSION_MESSAGE,
        }
    }
}

impl From<ImportRejection> for BudgetsError {
    fn from(rejection: ImportRejection) -> Self {
        match rejection {
            ImportRejection::Unparsable(detail) => {
                BudgetsError::Import(format!("{} ({})", PARSE_ERROR_MESSAGE, detail))
            }
            ImportRejection::NewerVersion(version) => {
                BudgetsError::Import(format!("{} (schema version {})", NEWER_VERSION_MESSAGE, version))
            }
        }
    }
}

/// Outer `None`: key missing. `Some(None)`: key present but null.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportFile {
    schema_version: Option<u32>,
    #[serde(default, deserialize_with = "present")]
    budgets: Option<Option<Vec<Budget>>>,
    #[serde(default, deserialize_with = "present")]
    expenses: Option<Option<Vec<Expense>>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Read an import file's contents
pub fn import_from_json(json_str: &str) -> Result<DataSet, ImportRejection> {
    let file: ImportFile =
        serde_json::from_str(json_str).map_err(|e| ImportRejection::Unparsable(e.to_string()))?;

    let version = file.schema_version.unwrap_or(EXPORT_SCHEMA_VERSION);
    if version > EXPORT_SCHEMA_VERSION {
        return Err(ImportRejection::NewerVersion(version));
    }

    if file.budgets.is_none() && file.expenses.is_none() {
        return Err(ImportRejection::Unparsable(
            "no budgets or expenses found".to_string(),
        ));
    }

    Ok(DataSet {
        budgets: file.budgets.flatten().unwrap_or_default(),
        expenses: file.expenses.flatten().unwrap_or_default(),
    })
}
