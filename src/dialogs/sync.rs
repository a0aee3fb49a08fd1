//! Sync dialog: sync token, force sync and deleting all data

use tracing::{info, warn};

use super::prompt::{confirm_delete, Prompt};
use super::settings::SettingsPanel;
use super::{DialogPhase, SubmitGuard, SubmitOutcome};
use crate::models::SettingName;
use crate::services::{DataLayer, LoadOptions, Notifier};

/// Where to get a sync token or help with one
pub const SYNC_TOKEN_URL: &str = "https://budgets.calm.sh/get-sync-token";

/// What the stored settings say about sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    /// A token is set and a sync has happened
    Enabled { last_sync_date: String },
    /// A token is set but no sync has ever succeeded
    TokenNotWorking,
    Disabled,
}

impl SyncStatus {
    pub fn from_settings(sync_token: &str, last_sync_date: &str) -> Self {
        match (sync_token.is_empty(), last_sync_date.is_empty()) {
            (false, false) => Self::Enabled {
                last_sync_date: last_sync_date.to_string(),
            },
            (false, true) => Self::TokenNotWorking,
            _ => Self::Disabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled { .. })
    }

    /// Explanatory notes shown under the token field
    pub fn notes(&self) -> Vec<String> {
        match self {
            Self::Enabled { last_sync_date } => vec![
                "Congrats on setting up a Sync Token!".to_string(),
                format!("Get help at {}", SYNC_TOKEN_URL),
                format!("Last sync: {}", last_sync_date),
            ],
            Self::TokenNotWorking => vec![
                "It seems your sync token above isn't working, for some reason.".to_string(),
                "Please confirm you have no extra spaces and there's no trailing slash."
                    .to_string(),
            ],
            Self::Disabled => vec![
                "You can pay a small amount yearly to get a Sync Token, or you can set one up yourself."
                    .to_string(),
                format!("Learn more about both options at {}", SYNC_TOKEN_URL),
            ],
        }
    }
}

#[derive(Debug, Default)]
pub struct SyncDialog {
    phase: DialogPhase,
    current_token: String,
    last_sync_date: String,
    /// Token as typed, saved on confirm
    pub token: String,
}

impl SyncDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn open(&mut self, data: &dyn DataLayer) {
        self.current_token = data.get_setting(SettingName::SyncToken);
        self.last_sync_date = data.get_setting(SettingName::LastSyncDate);
        self.token = self.current_token.clone();
        self.phase = DialogPhase::Open;
    }

    pub fn close(&mut self) {
        self.phase = DialogPhase::Closed;
        self.token.clear();
    }

    /// Status for the settings the dialog was opened with
    pub fn status(&self) -> SyncStatus {
        SyncStatus::from_settings(&self.current_token, &self.last_sync_date)
    }

    /// Save the typed token through the settings panel
    pub fn confirm(
        &mut self,
        settings: &mut SettingsPanel,
        data: &mut dyn DataLayer,
        notifier: &mut dyn Notifier,
    ) -> SubmitOutcome {
        let Some(guard) = SubmitGuard::begin(&mut self.phase) else {
            return SubmitOutcome::Ignored;
        };

        if !settings.phase().is_open() {
            settings.open(data);
        }
        let outcome = settings.set_sync_token(self.token.trim(), data, notifier);
        if !outcome.is_done() {
            return outcome;
        }

        drop(guard);
        self.close();
        SubmitOutcome::Done
    }

    /// Reload the month in view, bypassing any cache
    pub fn force_sync(&mut self, data: &mut dyn DataLayer) -> SubmitOutcome {
        let Some(guard) = SubmitGuard::begin(&mut self.phase) else {
            return SubmitOutcome::Ignored;
        };

        if let Err(err) = data.load_data(LoadOptions::force_reload()) {
            warn!(error = %err, "forced reload failed");
            return SubmitOutcome::Failed(err);
        }

        drop(guard);
        self.close();
        SubmitOutcome::Done
    }

    /// Delete every budget, expense and setting, after confirmation
    pub fn delete_all_data(
        &mut self,
        data: &mut dyn DataLayer,
        prompt: &mut dyn Prompt,
    ) -> SubmitOutcome {
        if self.phase != DialogPhase::Open {
            return SubmitOutcome::Ignored;
        }
        if !confirm_delete(prompt, "all data") {
            return SubmitOutcome::Cancelled;
        }

        let Some(guard) = SubmitGuard::begin(&mut self.phase) else {
            return SubmitOutcome::Ignored;
        };

        if let Err(err) = data.delete_all_data() {
            warn!(error = %err, "failed to delete all data");
            return SubmitOutcome::Failed(err);
        }
        info!("all data deleted");

        drop(guard);
        self.close();
        SubmitOutcome::Done
    }
}
