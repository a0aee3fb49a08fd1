//! Expenses report
//!
//! Filters the expenses of the month in view by description and budget.

use std::collections::BTreeSet;

use crate::models::{Budget, Expense, UNBUDGETED_NAME};

/// Empty-state text when filters hide every expense
pub const EXPENSES_FILTERED_EMPTY_STATE: &str =
    "No expenses found matching those filters. Try changing them!";

/// Empty-state text when the month simply has no expenses
pub const EXPENSES_EMPTY_STATE: &str = "No expenses found for this month. Go add one!";

/// Filter options for the expense list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Case-insensitive substring of the description
    pub description: Option<String>,
    /// Budget names to keep; empty keeps every budget
    pub budgets: BTreeSet<String>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by description
    pub fn description(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.description = if search.is_empty() { None } else { Some(search) };
        self
    }

    /// Keep expenses of this budget
    pub fn budget(mut self, name: impl Into<String>) -> Self {
        self.budgets.insert(name.into());
        self
    }

    /// Add or remove one budget name from the set
    pub fn toggle_budget(&mut self, name: &str, on: bool) {
        if on {
            self.budgets.insert(name.to_string());
        } else {
            self.budgets.remove(name);
        }
    }

    /// Whether any filter is set
    pub fn is_active(&self) -> bool {
        self.description.is_some() || !self.budgets.is_empty()
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(ref search) = self.description {
            if !expense
                .description
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }

        if !self.budgets.is_empty() && !self.budgets.contains(&expense.budget) {
            return false;
        }

        true
    }

    /// The matching expenses, in their original order
    pub fn apply<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        expenses.iter().filter(|e| self.matches(e)).collect()
    }

    /// Message to show when `apply` returned nothing
    pub fn empty_state(&self) -> &'static str {
        if self.is_active() {
            EXPENSES_FILTERED_EMPTY_STATE
        } else {
            EXPENSES_EMPTY_STATE
        }
    }
}

/// Budget name to show next to an expense: its own, or "Misc" when no budget has it
pub fn display_budget_name<'a>(expense: &'a Expense, budgets: &[Budget]) -> &'a str {
    if budgets.iter().any(|b| b.name == expense.budget) {
        &expense.budget
    } else {
        UNBUDGETED_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Month};
    use chrono::NaiveDate;

    fn expense(description: &str, budget: &str) -> Expense {
        Expense::new(
            Money::from_cents(100),
            description,
            budget,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        )
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("Coffee beans", "Food"),
            expense("Cinema", "Fun"),
            expense("coffee with Ana", "Fun"),
            expense("Rent", "Home"),
        ]
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let expenses = sample();
        let filter = ExpenseFilter::new();
        assert_eq!(filter.apply(&expenses).len(), 4);
        assert!(!filter.is_active());
    }

    #[test]
    fn test_description_is_case_insensitive_substring() {
        let expenses = sample();
        let result = ExpenseFilter::new().description("COFFEE").apply(&expenses);
        let names: Vec<&str> = result.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["Coffee beans", "coffee with Ana"]);
    }

    #[test]
    fn test_budget_set_is_exact() {
        let expenses = sample();
        let result = ExpenseFilter::new().budget("fun").apply(&expenses);
        assert!(result.is_empty());

        let result = ExpenseFilter::new().budget("Fun").budget("Home").apply(&expenses);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_filters_compose_with_and() {
        let expenses = sample();
        let result = ExpenseFilter::new()
            .description("coffee")
            .budget("Fun")
            .apply(&expenses);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "coffee with Ana");
    }

    #[test]
    fn test_toggle_budget() {
        let mut filter = ExpenseFilter::new();
        filter.toggle_budget("Food", true);
        filter.toggle_budget("Fun", true);
        filter.toggle_budget("Food", false);
        assert_eq!(filter.budgets.len(), 1);
        assert!(filter.budgets.contains("Fun"));
    }

    #[test]
    fn test_empty_states() {
        assert_eq!(ExpenseFilter::new().empty_state(), EXPENSES_EMPTY_STATE);
        assert_eq!(
            ExpenseFilter::new().description("x").empty_state(),
            EXPENSES_FILTERED_EMPTY_STATE
        );
        assert!(!ExpenseFilter::new().description("").is_active());
    }

    #[test]
    fn test_unmatched_budget_shows_misc() {
        let month = Month::parse("2024-01").unwrap();
        let budgets = vec![Budget::with_id("b1", "Food", month, Money::from_cents(100))];

        assert_eq!(display_budget_name(&expense("a", "Food"), &budgets), "Food");
        assert_eq!(display_budget_name(&expense("b", "Gone"), &budgets), "Misc");
    }
}
