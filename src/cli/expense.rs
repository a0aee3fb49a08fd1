//! Expense CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use super::{finish, Session};
use crate::dialogs::ExpenseDialog;
use crate::display::{format_expense_details, format_expense_list, format_month_header};
use crate::error::{BudgetsError, BudgetsResult};
use crate::models::{Expense, Month};
use crate::reports::ExpenseFilter;
use crate::services::{DataLayer, LoadOptions};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List the expenses of a month, newest first
    List {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
        /// Only show expenses whose description contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Only show expenses of these budgets (repeatable)
        #[arg(short, long = "budget")]
        budgets: Vec<String>,
    },
    /// Show one expense
    Show {
        /// Expense ID
        id: String,
    },
    /// Add an expense
    Add {
        /// Cost (e.g. "12.50" or "12,50")
        cost: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Budget name (defaults to the first budget of the month, or Misc)
        #[arg(short, long)]
        budget: Option<String>,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Change an expense
    Edit {
        /// Expense ID
        id: String,
        /// New cost
        #[arg(short, long)]
        cost: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New budget name
        #[arg(short, long)]
        budget: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },
}

fn find_expense(session: &Session, id: &str) -> BudgetsResult<Expense> {
    session
        .storage
        .expenses
        .get(id)?
        .ok_or_else(|| BudgetsError::expense_not_found(id))
}

/// The month an expense date falls in, if the date parses
fn month_of_date(date: Option<&str>) -> Option<Month> {
    date.and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
        .map(Month::of)
}

/// Handle an expense command
pub fn handle_expense_command(session: &mut Session, cmd: ExpenseCommands) -> BudgetsResult<()> {
    match cmd {
        ExpenseCommands::List {
            month,
            search,
            budgets,
        } => {
            let month = session.load_month(month.as_deref())?;

            let mut filter = ExpenseFilter::new();
            if let Some(search) = search {
                filter = filter.description(search);
            }
            for budget in budgets {
                filter = filter.budget(budget);
            }

            let expenses = filter.apply(session.storage.expenses());
            println!("{}", format_month_header(month));
            println!();
            print!(
                "{}",
                format_expense_list(
                    &expenses,
                    session.storage.budgets(),
                    session.currency(),
                    &session.config.date_format,
                    filter.empty_state(),
                )
            );
        }

        ExpenseCommands::Show { id } => {
            let expense = find_expense(session, &id)?;
            session.storage.load_data(LoadOptions::month(expense.month()))?;
            print!(
                "{}",
                format_expense_details(&expense, session.storage.budgets(), session.currency())
            );
        }

        ExpenseCommands::Add {
            cost,
            description,
            budget,
            date,
        } => {
            let month = month_of_date(date.as_deref()).unwrap_or_else(Month::current);
            session.storage.load_data(LoadOptions::month(month))?;

            let mut panel = ExpenseDialog::quick_add(session.storage.budgets());
            panel.form.cost = cost;
            panel.form.description = description;
            if let Some(budget) = budget {
                panel.form.budget = budget;
            }
            if let Some(date) = date {
                panel.form.date = date;
            }
            finish(panel.submit(&mut session.storage, &mut session.notifier))?;
        }

        ExpenseCommands::Edit {
            id,
            cost,
            description,
            budget,
            date,
        } => {
            let expense = find_expense(session, &id)?;
            session.storage.load_data(LoadOptions::month(expense.month()))?;

            let mut dialog = ExpenseDialog::new();
            dialog.open_edit(&expense);
            if let Some(cost) = cost {
                dialog.form.cost = cost;
            }
            if let Some(description) = description {
                dialog.form.description = description;
            }
            if let Some(budget) = budget {
                dialog.form.budget = budget;
            }
            if let Some(date) = date {
                dialog.form.date = date;
            }
            finish(dialog.submit(&mut session.storage, &mut session.notifier))?;
        }

        ExpenseCommands::Delete { id } => {
            let expense = find_expense(session, &id)?;
            let mut dialog = ExpenseDialog::new();
            dialog.open_edit(&expense);

            let mut prompt = session.prompt();
            finish(dialog.delete(&mut session.storage, &mut session.notifier, &mut prompt))?;
        }
    }

    Ok(())
}
