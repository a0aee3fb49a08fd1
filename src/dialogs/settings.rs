//! Settings panel: display currency and sync token

use tracing::{debug, warn};

use super::{DialogPhase, SubmitGuard, SubmitOutcome};
use crate::models::{Currency, Setting, SettingName};
use crate::services::{DataLayer, Notifier};

pub const SETTINGS_SAVED: &str = "Settings saved successfully.";

#[derive(Debug, Default)]
pub struct SettingsPanel {
    phase: DialogPhase,
    currency: Currency,
    sync_token: String,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn sync_token(&self) -> &str {
        &self.sync_token
    }

    /// Load the current values and open the panel
    pub fn open(&mut self, data: &dyn DataLayer) {
        self.currency = Currency::from_setting(&data.get_setting(SettingName::Currency));
        self.sync_token = data.get_setting(SettingName::SyncToken);
        self.phase = DialogPhase::Open;
    }

    pub fn close(&mut self) {
        self.phase = DialogPhase::Closed;
    }

    /// Save a new currency; the panel shows it once stored
    pub fn set_currency(
        &mut self,
        currency: Currency,
        data: &mut dyn DataLayer,
        notifier: &mut dyn Notifier,
    ) -> SubmitOutcome {
        let outcome = self.store(
            Setting::new(SettingName::Currency, currency.code()),
            data,
            notifier,
        );
        if outcome.is_done() {
            self.currency = currency;
        }
        outcome
    }

    /// Save a new sync token; the panel shows it once stored
    pub fn set_sync_token(
        &mut self,
        token: impl Into<String>,
        data: &mut dyn DataLayer,
        notifier: &mut dyn Notifier,
    ) -> SubmitOutcome {
        let token = token.into();
        let outcome = self.store(
            Setting::new(SettingName::SyncToken, token.clone()),
            data,
            notifier,
        );
        if outcome.is_done() {
            self.sync_token = token;
        }
        outcome
    }

    /// Save one setting from the panel's current values
    pub fn save_setting(
        &mut self,
        name: SettingName,
        data: &mut dyn DataLayer,
        notifier: &mut dyn Notifier,
    ) -> SubmitOutcome {
        let value = match name {
            SettingName::Currency => self.currency.code().to_string(),
            SettingName::SyncToken => self.sync_token.clone(),
            SettingName::LastSyncDate => data.get_setting(SettingName::LastSyncDate),
        };
        self.store(Setting::new(name, value), data, notifier)
    }

    fn store(
        &mut self,
        setting: Setting,
        data: &mut dyn DataLayer,
        notifier: &mut dyn Notifier,
    ) -> SubmitOutcome {
        let Some(_guard) = SubmitGuard::begin(&mut self.phase) else {
            return SubmitOutcome::Ignored;
        };

        let name = setting.name;
        debug!(setting = %name, "saving setting");
        if let Err(err) = data.save_setting(setting) {
            warn!(error = %err, setting = %name, "failed to save setting");
            return SubmitOutcome::Failed(err);
        }

        notifier.show_notification(SETTINGS_SAVED);
        SubmitOutcome::Done
    }
}
