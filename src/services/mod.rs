//! Service layer for budgets-cli
//!
//! The capability bundle handed to every view and dialog: data access
//! (`DataLayer`), user feedback (`Notifier`) and month navigation on top of
//! them.

pub mod data_layer;
pub mod navigation;
pub mod notifier;

pub use data_layer::{DataLayer, DataSet, LoadOptions};
pub use navigation::MonthNavigation;
pub use notifier::{ConsoleNotifier, NotificationType, Notifier};
