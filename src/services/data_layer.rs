//! The data capability every view and dialog is handed
//!
//! Implementations own all durable state. Views only read what the last
//! `load_data` call put in view, and dialogs only write through the methods
//! below.

use serde::{Deserialize, Serialize};

use crate::error::BudgetsResult;
use crate::models::{Budget, Expense, Month, Setting, SettingName};

/// Options for (re)loading the data in view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Month to load; `None` keeps the month currently in view
    pub month_to_load: Option<Month>,
    /// Reload even if the month is already loaded
    pub force_reload: bool,
}

impl LoadOptions {
    /// Load a specific month
    pub fn month(month: Month) -> Self {
        Self {
            month_to_load: Some(month),
            force_reload: false,
        }
    }

    /// Reload the month in view
    pub fn force_reload() -> Self {
        Self {
            month_to_load: None,
            force_reload: true,
        }
    }
}

/// Every budget and expense, as gathered for export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSet {
    pub budgets: Vec<Budget>,
    pub expenses: Vec<Expense>,
}

/// Data access shared by all views and dialogs
///
/// Failures are reported as `Err`; callers treat them as non-fatal and leave
/// the user free to retry.
pub trait DataLayer {
    /// Load budgets and expenses for a month, updating what is in view
    fn load_data(&mut self, options: LoadOptions) -> BudgetsResult<()>;

    /// The month currently in view
    fn month_in_view(&self) -> Month;

    /// Budgets of the month in view
    fn budgets(&self) -> &[Budget];

    /// Expenses of the month in view
    fn expenses(&self) -> &[Expense];

    /// Create or update a budget; a new/empty id creates
    fn save_budget(&mut self, budget: Budget) -> BudgetsResult<()>;

    /// Create or update an expense; a new/empty id creates
    fn save_expense(&mut self, expense: Expense) -> BudgetsResult<()>;

    fn delete_budget(&mut self, budget_id: &str) -> BudgetsResult<()>;

    fn delete_expense(&mut self, expense_id: &str) -> BudgetsResult<()>;

    /// Read a setting; unset settings read as an empty string
    fn get_setting(&self, name: SettingName) -> String;

    fn save_setting(&mut self, setting: Setting) -> BudgetsResult<()>;

    /// Bring in budgets and expenses; `replace` discards existing data first
    fn import_data(
        &mut self,
        replace: bool,
        budgets: Vec<Budget>,
        expenses: Vec<Expense>,
    ) -> BudgetsResult<()>;

    /// Gather every budget and expense
    fn export_all_data(&self) -> BudgetsResult<DataSet>;

    /// Remove every budget, expense and setting
    fn delete_all_data(&mut self) -> BudgetsResult<()>;
}
