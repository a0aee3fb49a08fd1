//! Expense dialog and the quick-add expense panel
//!
//! Both share one form. The dialog closes after a successful save; the panel
//! clears its fields and stays open for the next expense.

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use super::prompt::{confirm_delete, Prompt};
use super::{DialogPhase, SubmitGuard, SubmitOutcome, ERROR_ALERT_TITLE};
use crate::models::{Budget, Expense, Money, NEW_EXPENSE_ID, UNBUDGETED_NAME};
use crate::services::{DataLayer, Notifier};

/// Budget names offered for an expense; "Misc" when the month has none
pub fn budget_options(budgets: &[Budget]) -> Vec<String> {
    if budgets.is_empty() {
        return vec![UNBUDGETED_NAME.to_string()];
    }
    budgets.iter().map(|b| b.name.clone()).collect()
}

/// Text fields of the expense form, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub cost: String,
    pub description: String,
    pub budget: String,
    /// "YYYY-MM-DD"; empty means today
    pub date: String,
}

impl ExpenseForm {
    /// A blank form with the default budget and today's date
    pub fn blank(budgets: &[Budget], today: NaiveDate) -> Self {
        Self {
            cost: String::new(),
            description: String::new(),
            budget: budget_options(budgets).swap_remove(0),
            date: today.format("%Y-%m-%d").to_string(),
        }
    }

    /// Turn the typed text into an expense, or a message for the user
    pub fn to_expense(&self, id: Option<&str>, today: NaiveDate) -> Result<Expense, String> {
        let cost = Money::parse(&self.cost).map_err(|e| e.to_string())?;

        let date = match self.date.trim() {
            "" => today,
            text => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map_err(|_| format!("Invalid date: {:?} (expected YYYY-MM-DD)", text))?,
        };

        let budget = match self.budget.trim() {
            "" => UNBUDGETED_NAME,
            name => name,
        };

        let expense = Expense::new(cost, self.description.trim(), budget, date)
            .with_id(id.unwrap_or(NEW_EXPENSE_ID));
        expense.validate().map_err(|e| e.to_string())?;
        Ok(expense)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    Dialog,
    QuickAdd,
}

/// Dialog (or quick-add panel) for a single expense
#[derive(Debug, Default)]
pub struct ExpenseDialog {
    phase: DialogPhase,
    mode: Mode,
    id: Option<String>,
    pub form: ExpenseForm,
}

impl ExpenseDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The quick-add panel; always open
    pub fn quick_add(budgets: &[Budget]) -> Self {
        Self {
            phase: DialogPhase::Open,
            mode: Mode::QuickAdd,
            id: None,
            form: ExpenseForm::blank(budgets, today()),
        }
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Open an empty form for a new expense
    pub fn open_new(&mut self, budgets: &[Budget]) {
        self.id = None;
        self.form = ExpenseForm::blank(budgets, today());
        self.phase = DialogPhase::Open;
    }

    /// Open the form pre-filled with an existing expense
    pub fn open_edit(&mut self, expense: &Expense) {
        self.id = Some(expense.id.clone());
        self.form = ExpenseForm {
            cost: expense.cost.to_input_string(),
            description: expense.description.clone(),
            budget: expense.budget.clone(),
            date: expense.date.format("%Y-%m-%d").to_string(),
        };
        self.phase = DialogPhase::Open;
    }

    /// Close the dialog; the quick-add panel only clears its fields
    pub fn close(&mut self) {
        match self.mode {
            Mode::Dialog => {
                self.phase = DialogPhase::Closed;
                self.id = None;
                self.form = ExpenseForm::default();
            }
            Mode::QuickAdd => {
                self.form.cost.clear();
                self.form.description.clear();
                self.form.date = today().format("%Y-%m-%d").to_string();
            }
        }
    }

    /// Save the expense in the form
    pub fn submit(&mut self, data: &mut dyn DataLayer, notifier: &mut dyn Notifier) -> SubmitOutcome {
        let Some(guard) = SubmitGuard::begin(&mut self.phase) else {
            return SubmitOutcome::Ignored;
        };

        let expense = match self.form.to_expense(self.id.as_deref(), today()) {
            Ok(expense) => expense,
            Err(message) => {
                notifier.show_alert(ERROR_ALERT_TITLE, &message);
                return SubmitOutcome::Invalid(message);
            }
        };

        let is_new = expense.is_new();
        debug!(budget = %expense.budget, date = %expense.date, is_new, "saving expense");

        if let Err(err) = data.save_expense(expense) {
            warn!(error = %err, "failed to save expense");
            return SubmitOutcome::Failed(err);
        }

        notifier.show_notification(if is_new {
            "Expense added successfully."
        } else {
            "Expense updated successfully."
        });

        drop(guard);
        self.close();
        SubmitOutcome::Done
    }

    /// Delete the expense being edited, after confirmation
    pub fn delete(
        &mut self,
        data: &mut dyn DataLayer,
        notifier: &mut dyn Notifier,
        prompt: &mut dyn Prompt,
    ) -> SubmitOutcome {
        let Some(id) = self.id.clone() else {
            return SubmitOutcome::Ignored;
        };
        if self.phase != DialogPhase::Open {
            return SubmitOutcome::Ignored;
        }

        if !confirm_delete(prompt, "this expense") {
            return SubmitOutcome::Cancelled;
        }

        let Some(guard) = SubmitGuard::begin(&mut self.phase) else {
            return SubmitOutcome::Ignored;
        };

        if let Err(err) = data.delete_expense(&id) {
            warn!(error = %err, id = %id, "failed to delete expense");
            return SubmitOutcome::Failed(err);
        }
        info!(id = %id, "expense deleted");
        notifier.show_notification("Expense deleted successfully.");

        drop(guard);
        self.close();
        SubmitOutcome::Done
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
