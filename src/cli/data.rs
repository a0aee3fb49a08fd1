//! Import and export CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use super::{finish, Session};
use crate::dialogs::prompt::{MERGE_BUTTON, REPLACE_BUTTON};
use crate::dialogs::{ImportExportDialog, TerminalPrompt};
use crate::error::BudgetsResult;

/// Data subcommands
#[derive(Subcommand)]
pub enum DataCommands {
    /// Import budgets and expenses from a JSON export
    Import {
        /// File to import
        file: PathBuf,
        /// Merge with the existing data
        #[arg(long, conflicts_with = "replace")]
        merge: bool,
        /// Replace the existing data
        #[arg(long)]
        replace: bool,
    },
    /// Export every budget and expense to a JSON file
    Export {
        /// Destination (asked for when omitted)
        path: Option<PathBuf>,
    },
}

/// Handle a data command
pub fn handle_data_command(session: &mut Session, cmd: DataCommands) -> BudgetsResult<()> {
    let mut dialog = ImportExportDialog::new();
    dialog.open();

    match cmd {
        DataCommands::Import {
            file,
            merge,
            replace,
        } => {
            let mut prompt = TerminalPrompt::new().with_open_path(file);
            if merge {
                prompt = prompt.with_answer(MERGE_BUTTON);
            } else if replace {
                prompt = prompt.with_answer(REPLACE_BUTTON);
            }
            finish(dialog.request_import(&mut session.storage, &mut session.notifier, &mut prompt))?;
        }

        DataCommands::Export { path } => {
            let mut prompt = TerminalPrompt::new();
            if let Some(path) = path {
                prompt = prompt.with_save_path(path);
            }
            finish(dialog.request_export(&mut session.storage, &mut session.notifier, &mut prompt))?;
            dialog.close();
        }
    }

    Ok(())
}
