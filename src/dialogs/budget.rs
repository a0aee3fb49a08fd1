//! Budget dialog: add, edit and delete a single budget

use tracing::{debug, warn};

use super::prompt::{confirm_delete, Prompt};
use super::{DialogPhase, SubmitGuard, SubmitOutcome, ERROR_ALERT_TITLE};
use crate::models::{Budget, Money, Month, NEW_BUDGET_ID};
use crate::reports::BudgetRow;
use crate::services::{DataLayer, Notifier};

/// Text fields of the budget form, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetForm {
    pub name: String,
    pub value: String,
    pub month: String,
}

impl BudgetForm {
    /// Turn the typed text into a budget, or a message for the user
    pub fn to_budget(&self, id: Option<&str>) -> Result<Budget, String> {
        let value = Money::parse(&self.value).map_err(|e| e.to_string())?;
        let month = Month::parse(&self.month).map_err(|e| e.to_string())?;

        let budget = Budget::with_id(
            id.unwrap_or(NEW_BUDGET_ID),
            self.name.trim(),
            month,
            value,
        );
        budget.validate().map_err(|e| e.to_string())?;
        Ok(budget)
    }
}

/// Dialog for a single budget
#[derive(Debug, Default)]
pub struct BudgetDialog {
    phase: DialogPhase,
    id: Option<String>,
    /// Name and month the budget had when the dialog opened
    original: Option<(String, Month)>,
    pub form: BudgetForm,
}

impl BudgetDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    /// Whether the dialog edits an existing budget
    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Open an empty form for a new budget in `month`
    pub fn open_new(&mut self, month: Month, default_value: Money) {
        self.id = None;
        self.original = None;
        self.form = BudgetForm {
            name: String::new(),
            value: default_value.to_input_string(),
            month: month.to_string(),
        };
        self.phase = DialogPhase::Open;
    }

    /// Open the form pre-filled with an existing budget
    pub fn open_edit(&mut self, budget: &Budget) {
        self.id = Some(budget.id.clone());
        self.original = Some((budget.name.clone(), budget.month));
        self.form = BudgetForm {
            name: budget.name.clone(),
            value: budget.value.to_input_string(),
            month: budget.month.to_string(),
        };
        self.phase = DialogPhase::Open;
    }

    /// Open a row of the budgets table; the total row is refused
    pub fn open_row(&mut self, row: &BudgetRow) -> bool {
        if row.is_total() {
            debug!("the total row cannot be edited");
            return false;
        }
        self.open_edit(&row.to_budget());
        true
    }

    pub fn close(&mut self) {
        self.phase = DialogPhase::Closed;
        self.id = None;
        self.original = None;
        self.form = BudgetForm::default();
    }

    /// Save the budget in the form
    pub fn submit(&mut self, data: &mut dyn DataLayer, notifier: &mut dyn Notifier) -> SubmitOutcome {
        let Some(guard) = SubmitGuard::begin(&mut self.phase) else {
            return SubmitOutcome::Ignored;
        };

        let budget = match self.form.to_budget(self.id.as_deref()) {
            Ok(budget) => budget,
            Err(message) => {
                notifier.show_alert(ERROR_ALERT_TITLE, &message);
                return SubmitOutcome::Invalid(message);
            }
        };

        let orphaned = self
            .original
            .as_ref()
            .filter(|(old, _)| *old != budget.name)
            .map(|(old, old_month)| {
                let count = data
                    .expenses()
                    .iter()
                    .filter(|e| e.budget == *old && old_month.contains(e.date))
                    .count();
                (old.clone(), count)
            });

        let is_new = budget.is_new();
        debug!(name = %budget.name, month = %budget.month, is_new, "saving budget");

        if let Err(err) = data.save_budget(budget) {
            warn!(error = %err, "failed to save budget");
            return SubmitOutcome::Failed(err);
        }

        notifier.show_notification(if is_new {
            "Budget added successfully."
        } else {
            "Budget updated successfully."
        });

        if let Some((old, count)) = orphaned.filter(|(_, count)| *count > 0) {
            warn!(old_name = %old, count, "renamed budget leaves expenses behind");
            notifier.show_notification(&format!(
                "{} expense(s) still point to \"{}\" and will show as Misc.",
                count, old
            ));
        }

        drop(guard);
        self.close();
        SubmitOutcome::Done
    }

    /// Delete the budget being edited, after confirmation
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

        if !confirm_delete(prompt, "this budget") {
            return SubmitOutcome::Cancelled;
        }

        let Some(guard) = SubmitGuard::begin(&mut self.phase) else {
            return SubmitOutcome::Ignored;
        };

        if let Err(err) = data.delete_budget(&id) {
            warn!(error = %err, id = %id, "failed to delete budget");
            return SubmitOutcome::Failed(err);
        }
        tracing::info!(id = %id, "budget deleted");
        notifier.show_notification("Budget deleted successfully.");

        drop(guard);
        self.close();
        SubmitOutcome::Done
    }
}
