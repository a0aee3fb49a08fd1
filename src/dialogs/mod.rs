//! Dialogs for editing budgets, expenses, settings and data files
//!
//! Every dialog moves through the same phases:
//!
//! ```text
//! Closed -> Open -> Submitting -> Open (failure) | Closed (success)
//! ```
//!
//! A submission is only started from `Open`. While a submission is running the
//! dialog is `Submitting` and further submissions are ignored, so a repeated
//! click or Enter key never reaches the data layer twice. The phase is
//! restored by [`SubmitGuard`] on every exit path.

pub mod budget;
pub mod expense;
pub mod import_export;
pub mod prompt;
pub mod settings;
pub mod sync;

pub use budget::{BudgetDialog, BudgetForm};
pub use expense::{budget_options, ExpenseDialog, ExpenseForm};
pub use import_export::ImportExportDialog;
pub use prompt::{confirm_delete, MessageBox, Prompt, TerminalPrompt};
pub use settings::SettingsPanel;
pub use sync::{SyncDialog, SyncStatus};

use crate::error::{BudgetsError, BudgetsResult};

/// Title used for every input-error alert
pub const ERROR_ALERT_TITLE: &str = "Error!";

/// Where a dialog is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Closed,
    Open,
    Submitting,
}

impl DialogPhase {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Keeps a dialog in `Submitting` for as long as it is alive
///
/// Dropping the guard puts the dialog back to `Open`, whether the submission
/// succeeded, failed or bailed out early.
#[derive(Debug)]
pub struct SubmitGuard<'a> {
    phase: &'a mut DialogPhase,
}

impl<'a> SubmitGuard<'a> {
    /// Start a submission; `None` unless the dialog is `Open`
    pub fn begin(phase: &'a mut DialogPhase) -> Option<Self> {
        if *phase != DialogPhase::Open {
            tracing::debug!(?phase, "ignoring submission");
            return None;
        }
        *phase = DialogPhase::Submitting;
        Some(Self { phase })
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        *self.phase = DialogPhase::Open;
    }
}

/// What happened to a submission
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The data layer accepted the change
    Done,
    /// The dialog was busy or not open; nothing was sent
    Ignored,
    /// The user declined a confirmation or dismissed a picker
    Cancelled,
    /// The input could not be turned into a record; an alert was shown
    Invalid(String),
    /// The data layer or a chosen file reported an error; the dialog stays open
    Failed(BudgetsError),
}

impl SubmitOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Turn input and data layer failures into errors
    pub fn into_result(self) -> BudgetsResult<Self> {
        match self {
            Self::Failed(err) => Err(err),
            Self::Invalid(message) => Err(BudgetsError::Validation(message)),
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_open() {
        let mut phase = DialogPhase::Open;
        {
            let guard = SubmitGuard::begin(&mut phase);
            assert!(guard.is_some());
        }
        assert_eq!(phase, DialogPhase::Open);
    }

    #[test]
    fn test_guard_refuses_when_submitting() {
        let mut phase = DialogPhase::Submitting;
        assert!(SubmitGuard::begin(&mut phase).is_none());
        assert_eq!(phase, DialogPhase::Submitting);
    }

    #[test]
    fn test_guard_refuses_when_closed() {
        let mut phase = DialogPhase::Closed;
        assert!(SubmitGuard::begin(&mut phase).is_none());
        assert_eq!(phase, DialogPhase::Closed);
    }

    #[test]
    fn test_guard_marks_submitting_while_alive() {
        let mut phase = DialogPhase::Open;
        let guard = SubmitGuard::begin(&mut phase).unwrap();
        assert_eq!(*guard.phase, DialogPhase::Submitting);
        drop(guard);
        assert!(!phase.is_submitting());
    }

    #[test]
    fn test_outcome_into_result() {
        assert!(SubmitOutcome::Done.into_result().unwrap().is_done());
        assert!(SubmitOutcome::Cancelled.into_result().is_ok());
        assert!(SubmitOutcome::Invalid("bad".into())
            .into_result()
            .unwrap_err()
            .is_validation());
        assert!(SubmitOutcome::Failed(BudgetsError::Storage("x".into()))
            .into_result()
            .is_err());
    }
}
