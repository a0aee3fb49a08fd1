//! CLI command handlers
//!
//! Each subcommand fills in a dialog from its flags and submits it, the same
//! way a click or an Enter key would.

pub mod budget;
pub mod data;
pub mod expense;
pub mod month;
pub mod overview;
pub mod settings;
pub mod sync;

pub use budget::{handle_budget_command, BudgetCommands};
pub use data::{handle_data_command, DataCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use month::{handle_month_command, MonthCommands};
pub use overview::handle_overview_command;
pub use settings::{handle_settings_command, SettingsCommands};
pub use sync::{handle_sync_command, SyncCommands};

use crate::config::AppConfig;
use crate::dialogs::prompt::{TerminalPrompt, CONFIRM_BUTTON};
use crate::dialogs::SubmitOutcome;
use crate::error::{BudgetsError, BudgetsResult};
use crate::models::{Currency, Month, SettingName};
use crate::services::{ConsoleNotifier, DataLayer, LoadOptions};
use crate::storage::Storage;

/// Everything a command needs: the store, feedback and configuration
pub struct Session {
    pub storage: Storage,
    pub notifier: ConsoleNotifier,
    pub config: AppConfig,
    /// Answer "Yes!" to every confirmation
    pub assume_yes: bool,
}

impl Session {
    pub fn new(storage: Storage, config: AppConfig, assume_yes: bool) -> Self {
        Self {
            storage,
            notifier: ConsoleNotifier::new(),
            config,
            assume_yes,
        }
    }

    /// A prompt that honours `--yes`
    pub fn prompt(&self) -> TerminalPrompt {
        if self.assume_yes {
            TerminalPrompt::new().with_answer(CONFIRM_BUTTON)
        } else {
            TerminalPrompt::new()
        }
    }

    /// Put `month` (or the current month) in view
    pub fn load_month(&mut self, month: Option<&str>) -> BudgetsResult<Month> {
        let month = parse_month_arg(month)?;
        self.storage.load_data(LoadOptions::month(month))?;
        Ok(month)
    }

    pub fn currency(&self) -> Currency {
        Currency::from_setting(&self.storage.get_setting(SettingName::Currency))
    }
}

/// Parse an optional month argument; `None` means the current month
pub fn parse_month_arg(month: Option<&str>) -> BudgetsResult<Month> {
    match month {
        Some(text) => Month::parse(text).map_err(|e| BudgetsError::Validation(e.to_string())),
        None => Ok(Month::current()),
    }
}

/// Report a dialog outcome on the terminal
pub(crate) fn finish(outcome: SubmitOutcome) -> BudgetsResult<()> {
    match outcome.into_result()? {
        SubmitOutcome::Cancelled => println!("Cancelled."),
        SubmitOutcome::Ignored => tracing::debug!("submission ignored"),
        _ => {}
    }
    Ok(())
}
