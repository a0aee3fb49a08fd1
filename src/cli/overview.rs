//! The month overview: header, expenses and budgets together

use super::Session;
use crate::display::{format_budget_table, format_expense_list, format_month_header};
use crate::error::BudgetsResult;
use crate::reports::{budget_rows, ExpenseFilter};
use crate::services::DataLayer;

/// Print the overview of a month
pub fn handle_overview_command(session: &mut Session, month: Option<&str>) -> BudgetsResult<()> {
    let month = session.load_month(month)?;
    let currency = session.currency();

    let filter = ExpenseFilter::new();
    let expenses = filter.apply(session.storage.expenses());
    let rows = budget_rows(session.storage.budgets(), session.storage.expenses(), month);

    println!("{}", format_month_header(month));
    println!();
    println!("Expenses");
    print!(
        "{}",
        format_expense_list(
            &expenses,
            session.storage.budgets(),
            currency,
            &session.config.date_format,
            filter.empty_state(),
        )
    );
    println!();
    println!("Budgets");
    print!("{}", format_budget_table(&rows, currency));

    Ok(())
}
