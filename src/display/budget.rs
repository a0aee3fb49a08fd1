//! Budget display formatting

use super::truncate;
use crate::models::Currency;
use crate::reports::{BudgetRow, BUDGETS_EMPTY_STATE};

/// Format the budgets table; the total row, if any, is separated from the rest
pub fn format_budget_table(rows: &[BudgetRow], currency: Currency) -> String {
    if rows.is_empty() {
        return format!("{}\n", BUDGETS_EMPTY_STATE);
    }

    let symbol = currency.symbol();
    let mut output = String::new();
    output.push_str(&format!(
        "{:<24} {:>12} {:>12} {:>12}  {}\n",
        "Budget", "Spent", "Budgeted", "Remaining", "Id"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for row in rows {
        let marker = if row.is_over_budget() { " *" } else { "" };
        let id = if row.is_total() { "" } else { row.id.as_str() };
        output.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>12}  {}{}\n",
            truncate(&row.name, 24),
            row.expenses_cost.format_with_symbol(symbol),
            row.value.format_with_symbol(symbol),
            row.remaining().format_with_symbol(symbol),
            id,
            marker
        ));
        if row.is_total() {
            output.push_str(&"-".repeat(80));
            output.push('\n');
        }
    }

    if rows.iter().any(|r| r.is_over_budget()) {
        output.push_str("\n* = Over budget\n");
    }

    output
}

/// Format a single budget row in detail
pub fn format_budget_details(row: &BudgetRow, currency: Currency) -> String {
    let symbol = currency.symbol();
    let mut output = String::new();
    output.push_str(&format!("Budget:    {}\n", row.name));
    output.push_str(&format!("Id:        {}\n", row.id));
    output.push_str(&format!("Month:     {}\n", row.month.friendly()));
    output.push_str(&format!("Budgeted:  {}\n", row.value.format_with_symbol(symbol)));
    output.push_str(&format!(
        "Spent:     {}\n",
        row.expenses_cost.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining: {}\n",
        row.remaining().format_with_symbol(symbol)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Expense, Money, Month};
    use crate::reports::budget_rows;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_budget_table(&[], Currency::Usd),
            "No budgets found for this month. Add one below!\n"
        );
    }

    #[test]
    fn test_table_uses_currency_and_marks_overspend() {
        let month = Month::parse("2024-01").unwrap();
        let budgets = vec![Budget::with_id("b1", "Fun", month, Money::from_cents(5000))];
        let expenses = vec![Expense::new(
            Money::from_cents(6000),
            "Concert",
            "Fun",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        )];
        let rows = budget_rows(&budgets, &expenses, month);

        let output = format_budget_table(&rows, Currency::Eur);
        assert!(output.contains("Total"));
        assert!(output.contains("€60.00"));
        assert!(output.contains("-€10.00"));
        assert!(output.contains("b1 *"));
        assert!(output.contains("* = Over budget"));
    }

    #[test]
    fn test_details() {
        let month = Month::parse("2024-01").unwrap();
        let rows = budget_rows(
            &[Budget::with_id("b1", "Food", month, Money::from_cents(10000))],
            &[],
            month,
        );
        let output = format_budget_details(&rows[1], Currency::Gbp);
        assert!(output.contains("January 2024"));
        assert!(output.contains("£100.00"));
    }
}
