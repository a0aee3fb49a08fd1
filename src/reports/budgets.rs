//! Budgets report
//!
//! Combines the budgets of the month in view with that month's expenses
//! into display rows, most over-budget first, headed by a total row.

use std::cmp::Ordering;

use crate::models::{Budget, Expense, Money, Month};

/// Id of the synthetic row that sums every budget
pub const TOTAL_ID: &str = "total";

/// Name shown for the total row
pub const TOTAL_NAME: &str = "Total";

/// Shown instead of the table when the month has no budgets
pub const BUDGETS_EMPTY_STATE: &str = "No budgets found for this month. Add one below!";

/// A single row in the budgets table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetRow {
    pub id: String,
    pub name: String,
    /// Spending limit
    pub value: Money,
    /// Sum of the costs of expenses pointing at this budget by name
    pub expenses_cost: Money,
    pub month: Month,
}

impl BudgetRow {
    fn for_budget(budget: &Budget, expenses: &[Expense]) -> Self {
        let expenses_cost = expenses
            .iter()
            .filter(|expense| expense.budget == budget.name)
            .map(|expense| expense.cost)
            .sum();

        Self {
            id: budget.id.clone(),
            name: budget.name.clone(),
            value: budget.value,
            expenses_cost,
            month: budget.month,
        }
    }

    /// Money left before the limit is reached (negative when over budget)
    pub fn remaining(&self) -> Money {
        self.value - self.expenses_cost
    }

    pub fn is_over_budget(&self) -> bool {
        self.expenses_cost > self.value
    }

    /// Whether this is the synthetic total row
    pub fn is_total(&self) -> bool {
        self.id == TOTAL_ID
    }

    /// The budget this row was built from, for editing
    pub fn to_budget(&self) -> Budget {
        Budget::with_id(self.id.clone(), self.name.clone(), self.month, self.value)
    }
}

/// Order rows so the most over-budget comes first
///
/// Ties are broken by name, then id, so the order is total.
pub fn sort_by_missing_budget(a: &BudgetRow, b: &BudgetRow) -> Ordering {
    a.remaining()
        .cmp(&b.remaining())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Build the rows of the budgets table
///
/// When there is at least one budget, the first row is the total row.
pub fn budget_rows(budgets: &[Budget], expenses: &[Expense], month_in_view: Month) -> Vec<BudgetRow> {
    let mut rows: Vec<BudgetRow> = budgets
        .iter()
        .map(|budget| BudgetRow::for_budget(budget, expenses))
        .collect();

    if rows.is_empty() {
        return rows;
    }

    rows.sort_by(sort_by_missing_budget);

    let total = BudgetRow {
        id: TOTAL_ID.to_string(),
        name: TOTAL_NAME.to_string(),
        value: rows.iter().map(|row| row.value).sum(),
        expenses_cost: rows.iter().map(|row| row.expenses_cost).sum(),
        month: month_in_view,
    };
    rows.insert(0, total);

    rows
}
