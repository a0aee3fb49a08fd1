//! JSON file helpers for the local store
//!
//! Data files are replaced atomically: the new contents go to a sibling
//! `.json.tmp` file which is then renamed over the original.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{BudgetsError, BudgetsResult};

/// Read a data file; a missing file reads as `T::default()`
pub fn read_json<T, P>(path: P) -> BudgetsResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| BudgetsError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| BudgetsError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Replace a data file with `data`, pretty-printed
pub fn write_json_atomic<T, P>(path: P, data: &T) -> BudgetsResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let storage_err = |what: &str, e: &dyn std::fmt::Display| {
        BudgetsError::Storage(format!("{} {}: {}", what, path.display(), e))
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| storage_err("Failed to create directory for", &e))?;
    }

    let temp_path = path.with_extension("json.tmp");
    let file = File::create(&temp_path)
        .map_err(|e| storage_err("Failed to create temp file for", &e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_err("Failed to serialize", &e))?;
    writer.flush().map_err(|e| storage_err("Failed to write", &e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_err("Failed to sync", &e))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_err("Failed to replace", &e));
    }

    Ok(())
}
