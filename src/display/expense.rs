//! Expense display formatting

use super::truncate;
use crate::models::{Budget, Currency, Expense};
use crate::reports::display_budget_name;

fn format_expense_row(expense: &Expense, budgets: &[Budget], currency: Currency, date_format: &str) -> String {
    format!(
        "{:<10} {:<28} {:<16} {:>12}  {}",
        expense.date.format(date_format),
        truncate(&expense.description, 28),
        truncate(display_budget_name(expense, budgets), 16),
        expense.cost.format_with_symbol(currency.symbol()),
        expense.id
    )
}

/// Format a list of expenses; `empty_state` is shown when there are none
pub fn format_expense_list(
    expenses: &[&Expense],
    budgets: &[Budget],
    currency: Currency,
    date_format: &str,
    empty_state: &str,
) -> String {
    if expenses.is_empty() {
        return format!("{}\n", empty_state);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {:<28} {:<16} {:>12}  {}\n",
        "Date", "Description", "Budget", "Cost", "Id"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, budgets, currency, date_format));
        output.push('\n');
    }

    output
}

/// Format a single expense in detail
pub fn format_expense_details(expense: &Expense, budgets: &[Budget], currency: Currency) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "Cost:        {}\n",
        expense.cost.format_with_symbol(currency.symbol())
    ));
    output.push_str(&format!("Budget:      {}\n", display_budget_name(expense, budgets)));
    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Month};
    use chrono::NaiveDate;

    fn lunch() -> Expense {
        Expense::new(
            Money::from_cents(1099),
            "Lunch",
            "Gone",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        )
        .with_id("e1")
    }

    #[test]
    fn test_empty_list_shows_message() {
        let output = format_expense_list(&[], &[], Currency::Usd, "%Y-%m-%d", "Nothing here");
        assert_eq!(output, "Nothing here\n");
    }

    #[test]
    fn test_list_row() {
        let month = Month::parse("2024-01").unwrap();
        let budgets = vec![Budget::with_id("b1", "Food", month, Money::zero())];
        let expense = lunch();

        let output = format_expense_list(&[&expense], &budgets, Currency::Usd, "%d/%m/%Y", "");
        assert!(output.contains("05/01/2024"));
        assert!(output.contains("Misc"));
        assert!(output.contains("$10.99"));
        assert!(output.contains("e1"));
    }

    #[test]
    fn test_details() {
        let output = format_expense_details(&lunch(), &[], Currency::Gbp);
        assert!(output.contains("£10.99"));
        assert!(output.contains("Budget:      Misc"));
        assert!(output.contains("Description: Lunch"));
    }
}
