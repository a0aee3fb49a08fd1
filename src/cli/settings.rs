//! Settings CLI commands

use clap::Subcommand;

use super::{finish, Session};
use crate::dialogs::{SettingsPanel, SyncStatus};
use crate::error::{BudgetsError, BudgetsResult};
use crate::models::{Currency, SettingName};
use crate::services::DataLayer;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the current settings
    Show,
    /// Set the display currency
    Currency {
        /// Currency code (USD, EUR or GBP)
        code: String,
    },
}

/// Handle a settings command
pub fn handle_settings_command(session: &mut Session, cmd: SettingsCommands) -> BudgetsResult<()> {
    let mut panel = SettingsPanel::new();
    panel.open(&session.storage);

    match cmd {
        SettingsCommands::Show => {
            let currency = panel.currency();
            let status = SyncStatus::from_settings(
                panel.sync_token(),
                &session.storage.get_setting(SettingName::LastSyncDate),
            );

            println!("Currency:  {} ({})", currency.code(), currency.symbol());
            println!(
                "Sync:      {}",
                if status.is_enabled() { "enabled" } else { "disabled" }
            );
            println!("Data dir:  {}", session.storage.paths().data_dir().display());
        }

        SettingsCommands::Currency { code } => {
            let currency: Currency = code.parse().map_err(BudgetsError::Setting)?;
            finish(panel.set_currency(currency, &mut session.storage, &mut session.notifier))?;
        }
    }

    panel.close();
    Ok(())
}
