//! Core data models for budgets-cli
//!
//! Plain records for budgets, expenses and settings, plus the value types
//! they are built from (money amounts and calendar months).

pub mod budget;
pub mod expense;
pub mod money;
pub mod month;
pub mod setting;

pub use budget::{Budget, BudgetValidationError, NEW_BUDGET_ID};
pub use expense::{Expense, ExpenseValidationError, NEW_EXPENSE_ID, UNBUDGETED_NAME};
pub use money::{Money, MoneyParseError, MAX_UNITS};
pub use month::{Month, MonthParseError};
pub use setting::{Currency, Setting, SettingName};
