//! Budget CLI commands

use clap::Subcommand;

use super::{finish, Session};
use crate::dialogs::BudgetDialog;
use crate::display::{format_budget_details, format_budget_table, format_month_header};
use crate::error::{BudgetsError, BudgetsResult};
use crate::models::Budget;
use crate::reports::{budget_rows, BudgetRow};
use crate::services::{DataLayer, LoadOptions};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// List the budgets of a month, most over-budget first
    List {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Show one budget with its spending
    Show {
        /// Budget ID
        id: String,
    },
    /// Add a budget
    Add {
        /// Budget name
        name: String,
        /// Spending limit (e.g. "100" or "99,50"; defaults to the configured value)
        #[arg(short, long)]
        value: Option<String>,
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Change a budget
    Edit {
        /// Budget ID
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New spending limit
        #[arg(short, long)]
        value: Option<String>,
        /// New month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Delete a budget
    Delete {
        /// Budget ID
        id: String,
    },
}

fn find_budget(session: &Session, id: &str) -> BudgetsResult<Budget> {
    session
        .storage
        .budgets
        .get(id)?
        .ok_or_else(|| BudgetsError::budget_not_found(id))
}

/// Load the budget's month and return its row in the budgets table
fn budget_row(session: &mut Session, budget: &Budget) -> BudgetsResult<BudgetRow> {
    session.storage.load_data(LoadOptions::month(budget.month))?;
    budget_rows(
        session.storage.budgets(),
        session.storage.expenses(),
        budget.month,
    )
    .into_iter()
    .find(|row| row.id == budget.id)
    .ok_or_else(|| BudgetsError::budget_not_found(&budget.id))
}

/// Handle a budget command
pub fn handle_budget_command(session: &mut Session, cmd: BudgetCommands) -> BudgetsResult<()> {
    match cmd {
        BudgetCommands::List { month } => {
            let month = session.load_month(month.as_deref())?;
            let rows = budget_rows(session.storage.budgets(), session.storage.expenses(), month);

            println!("{}", format_month_header(month));
            println!();
            print!("{}", format_budget_table(&rows, session.currency()));
        }

        BudgetCommands::Show { id } => {
            let budget = find_budget(session, &id)?;
            let row = budget_row(session, &budget)?;
            print!("{}", format_budget_details(&row, session.currency()));
        }

        BudgetCommands::Add { name, value, month } => {
            let month = session.load_month(month.as_deref())?;
            let mut dialog = BudgetDialog::new();
            dialog.open_new(month, session.config.default_budget_value);
            dialog.form.name = name;
            if let Some(value) = value {
                dialog.form.value = value;
            }
            finish(dialog.submit(&mut session.storage, &mut session.notifier))?;
        }

        BudgetCommands::Edit {
            id,
            name,
            value,
            month,
        } => {
            let budget = find_budget(session, &id)?;
            let row = budget_row(session, &budget)?;

            let mut dialog = BudgetDialog::new();
            if !dialog.open_row(&row) {
                return Err(BudgetsError::Validation(
                    "The total row cannot be edited".into(),
                ));
            }
            if let Some(name) = name {
                dialog.form.name = name;
            }
            if let Some(value) = value {
                dialog.form.value = value;
            }
            if let Some(month) = month {
                dialog.form.month = month;
            }
            finish(dialog.submit(&mut session.storage, &mut session.notifier))?;
        }

        BudgetCommands::Delete { id } => {
            let budget = find_budget(session, &id)?;
            let mut dialog = BudgetDialog::new();
            dialog.open_edit(&budget);

            let mut prompt = session.prompt();
            finish(dialog.delete(&mut session.storage, &mut session.notifier, &mut prompt))?;
        }
    }

    Ok(())
}
