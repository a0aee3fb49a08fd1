//! Application configuration for budgets-cli
//!
//! Local preferences that are not part of the budget data itself: the log
//! filter, the value pre-filled for new budgets and the display date format.

use serde::{Deserialize, Serialize};

use super::paths::BudgetsPaths;
use crate::error::BudgetsError;
use crate::models::Money;

/// User configuration stored in `config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// `tracing` filter directive used when `BUDGETS_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Value pre-filled when creating a budget
    #[serde(default = "default_budget_value")]
    pub default_budget_value: Money,

    /// Date format used when listing expenses (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_budget_value() -> Money {
    Money::from_cents(10000)
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            log_filter: default_log_filter(),
            default_budget_value: default_budget_value(),
            date_format: default_date_format(),
        }
    }
}

impl AppConfig {
    /// Load the configuration from disk, or defaults if the file doesn't exist
    pub fn load_or_default(paths: &BudgetsPaths) -> Result<Self, BudgetsError> {
        let config_path = paths.config_file();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| BudgetsError::Io(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BudgetsError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Save the configuration to disk
    pub fn save(&self, paths: &BudgetsPaths) -> Result<(), BudgetsError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetsError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(paths.config_file(), contents)
            .map_err(|e| BudgetsError::Io(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.default_budget_value.cents(), 10000);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetsPaths::with_base_dir(temp_dir.path().to_path_buf());
        let config = AppConfig::load_or_default(&paths).unwrap();
        assert_eq!(config.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetsPaths::with_base_dir(temp_dir.path().to_path_buf());

        let config = AppConfig {
            log_filter: "budgets=debug".into(),
            default_budget_value: Money::from_cents(25000),
            ..AppConfig::default()
        };
        config.save(&paths).unwrap();

        let loaded = AppConfig::load_or_default(&paths).unwrap();
        assert_eq!(loaded.log_filter, "budgets=debug");
        assert_eq!(loaded.default_budget_value.cents(), 25000);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetsPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.config_file(), r#"{"date_format": "%d/%m/%Y"}"#).unwrap();

        let loaded = AppConfig::load_or_default(&paths).unwrap();
        assert_eq!(loaded.date_format, "%d/%m/%Y");
        assert_eq!(loaded.log_filter, "warn");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetsPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.config_file(), "not json").unwrap();

        let err = AppConfig::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, BudgetsError::Config(_)));
    }
}
