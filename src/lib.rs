//! budgets-cli - Terminal-based monthly budgets and expenses tracker
//!
//! Each month has its own budgets (a name and a spending limit) and
//! expenses (a cost, a description, the budget it counts against and a date).
//! The crate keeps that data in local JSON files and exposes it through a
//! small capability bundle that every view and dialog is handed.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: `tracing` subscriber setup
//! - `models`: Budgets, expenses, money, months and settings
//! - `services`: The data layer and notifier capabilities, month navigation
//! - `storage`: The local JSON data layer
//! - `reports`: Derived views (budget rows with totals, expense filters)
//! - `dialogs`: Add/edit/delete dialogs, settings, sync and import/export
//! - `export`: JSON export and validated import
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use budgets::config::BudgetsPaths;
//! use budgets::services::{DataLayer, LoadOptions};
//! use budgets::storage::Storage;
//!
//! let mut storage = Storage::new(BudgetsPaths::new()?)?;
//! storage.load_data(LoadOptions::default())?;
//! ```

pub mod cli;
pub mod config;
pub mod dialogs;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

#[cfg(test)]
mod testing;

pub use error::{BudgetsError, BudgetsResult};
