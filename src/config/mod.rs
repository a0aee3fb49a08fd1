//! Configuration module for budgets-cli
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - Application preferences persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetsPaths;
pub use settings::AppConfig;
