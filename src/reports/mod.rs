//! Reports module for budgets-cli
//!
//! Derived views over the month in view: budget rows with spend totals and
//! the filtered expense list. Everything here is recomputed on every call.

pub mod budgets;
pub mod expenses;

pub use budgets::{budget_rows, sort_by_missing_budget, BudgetRow, BUDGETS_EMPTY_STATE, TOTAL_ID};
pub use expenses::{display_budget_name, ExpenseFilter};
