//! Path management for budgets-cli
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGETS_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/budgets-cli` on Linux,
//!    `~/Library/Application Support/budgets-cli` on macOS, `%APPDATA%\budgets-cli`
//!    on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BudgetsError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BUDGETS_CLI_DATA_DIR";

/// Manages all paths used by budgets-cli
#[derive(Debug, Clone)]
pub struct BudgetsPaths {
    /// Base directory for all budgets-cli data
    base_dir: PathBuf,
}

impl BudgetsPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, BudgetsError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the application configuration file
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Get the path to settings.json (currency, sync token, last sync date)
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir().join("settings.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetsError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetsError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetsError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgetsError> {
    ProjectDirs::from("", "", "budgets-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BudgetsError::Config("Could not determine the home directory".into()))
}
