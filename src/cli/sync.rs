//! Sync CLI commands

use clap::Subcommand;

use super::{finish, Session};
use crate::dialogs::{SettingsPanel, SyncDialog};
use crate::error::{BudgetsError, BudgetsResult};
use crate::services::DataLayer;

/// Sync subcommands
#[derive(Subcommand)]
pub enum SyncCommands {
    /// Show whether sync is set up
    Status,
    /// Set or clear the sync token
    Token {
        /// The token; asked for without echo when omitted. Pass "" to clear it.
        token: Option<String>,
    },
    /// Reload the data in view, bypassing any cache
    Now,
    /// Delete every budget, expense and setting
    DeleteAll,
}

/// Read a token from the terminal without echoing it
fn prompt_token() -> BudgetsResult<String> {
    rpassword::prompt_password("Sync token: ")
        .map_err(|e| BudgetsError::Io(format!("Failed to read sync token: {}", e)))
}

/// Handle a sync command
pub fn handle_sync_command(session: &mut Session, cmd: SyncCommands) -> BudgetsResult<()> {
    let mut dialog = SyncDialog::new();
    dialog.open(&session.storage);

    match cmd {
        SyncCommands::Status => {
            for note in dialog.status().notes() {
                println!("{}", note);
            }
            dialog.close();
        }

        SyncCommands::Token { token } => {
            dialog.token = match token {
                Some(token) => token,
                None => prompt_token()?,
            };
            let mut settings = SettingsPanel::new();
            finish(dialog.confirm(&mut settings, &mut session.storage, &mut session.notifier))?;
        }

        SyncCommands::Now => {
            finish(dialog.force_sync(&mut session.storage))?;
            println!("Reloaded {}.", session.storage.month_in_view().friendly());
        }

        SyncCommands::DeleteAll => {
            let mut prompt = session.prompt();
            let outcome = dialog.delete_all_data(&mut session.storage, &mut prompt);
            let deleted = outcome.is_done();
            finish(outcome)?;
            if deleted {
                println!("All data deleted.");
            }
        }
    }

    Ok(())
}
