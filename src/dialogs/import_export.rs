//! Import/export dialog
//!
//! Import reads a JSON file, asks whether to merge or replace, and hands the
//! data to the data layer. Export writes everything the data layer has to a
//! file the user picks.

use chrono::Utc;
use tracing::{info, warn};

use super::prompt::{MessageBox, Prompt, MERGE_BUTTON, REPLACE_BUTTON};
use super::{DialogPhase, SubmitGuard, SubmitOutcome, ERROR_ALERT_TITLE};
use crate::error::BudgetsError;
use crate::export::{default_export_file_name, export_to_file, import_from_json, DataExport};
use crate::services::{DataLayer, Notifier};

#[derive(Debug, Default)]
pub struct ImportExportDialog {
    phase: DialogPhase,
}

impl ImportExportDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn open(&mut self) {
        self.phase = DialogPhase::Open;
    }

    pub fn close(&mut self) {
        self.phase = DialogPhase::Closed;
    }

    /// Pick a file, confirm merge or replace, and import it
    pub fn request_import(
        &mut self,
        data: &mut dyn DataLayer,
        notifier: &mut dyn Notifier,
        prompt: &mut dyn Prompt,
    ) -> SubmitOutcome {
        let Some(guard) = SubmitGuard::begin(&mut self.phase) else {
            return SubmitOutcome::Ignored;
        };

        let Some(path) = prompt.open_file("Choose JSON File") else {
            return SubmitOutcome::Cancelled;
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                let message = format!("Could not read {}: {}", path.display(), err);
                notifier.show_alert(ERROR_ALERT_TITLE, &message);
                return SubmitOutcome::Failed(BudgetsError::Import(message));
            }
        };

        let imported = match import_from_json(&contents) {
            Ok(imported) => imported,
            Err(rejection) => {
                warn!(path = %path.display(), ?rejection, "import file rejected");
                notifier.show_alert(ERROR_ALERT_TITLE, rejection.message());
                return SubmitOutcome::Failed(rejection.into());
            }
        };

        let replace = match prompt.message_box(&MessageBox::merge_or_replace()) {
            MERGE_BUTTON => false,
            REPLACE_BUTTON => true,
            _ => return SubmitOutcome::Cancelled,
        };

        info!(
            path = %path.display(),
            budgets = imported.budgets.len(),
            expenses = imported.expenses.len(),
            replace,
            "importing data"
        );
        if let Err(err) = data.import_data(replace, imported.budgets, imported.expenses) {
            warn!(error = %err, "import failed");
            return SubmitOutcome::Failed(err);
        }

        notifier.show_notification("Data imported successfully.");

        drop(guard);
        self.close();
        SubmitOutcome::Done
    }

    /// Pick a destination and write every budget and expense to it
    pub fn request_export(
        &mut self,
        data: &mut dyn DataLayer,
        notifier: &mut dyn Notifier,
        prompt: &mut dyn Prompt,
    ) -> SubmitOutcome {
        let Some(_guard) = SubmitGuard::begin(&mut self.phase) else {
            return SubmitOutcome::Ignored;
        };

        let default_name = default_export_file_name(Utc::now());
        let Some(path) = prompt.save_file("Choose where to create the JSON file", &default_name)
        else {
            return SubmitOutcome::Cancelled;
        };

        let export = match data.export_all_data() {
            Ok(all) => DataExport::from(all),
            Err(err) => {
                warn!(error = %err, "failed to gather data for export");
                return SubmitOutcome::Failed(err);
            }
        };

        if let Err(err) = export_to_file(&export, &path) {
            warn!(error = %err, "failed to write export");
            notifier.show_alert(ERROR_ALERT_TITLE, &err.to_string());
            return SubmitOutcome::Failed(err);
        }

        info!(
            path = %path.display(),
            budgets = export.budgets.len(),
            expenses = export.expenses.len(),
            "data exported"
        );
        notifier.show_notification("Data exported successfully!");
        SubmitOutcome::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::prompt::CANCEL_BUTTON;
    use crate::export::json::PARSE_ERROR_MESSAGE;
    use crate::models::{Budget, Money, Month};
    use crate::testing::{RecordingNotifier, ScriptedPrompt, StubDataLayer};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn jan() -> Month {
        Month::parse("2024-01").unwrap()
    }

    fn write_file(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("import.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn open_dialog() -> ImportExportDialog {
        let mut dialog = ImportExportDialog::new();
        dialog.open();
        dialog
    }

    #[test]
    fn test_import_replace() {
        let temp_dir = TempDir::new().unwrap();
        let mut data = StubDataLayer::new(jan());
        let mut notifier = RecordingNotifier::default();
        let mut prompt = ScriptedPrompt::answering(&[REPLACE_BUTTON]);
        prompt.open_path = Some(write_file(
            &temp_dir,
            r#"{"budgets":[{"id":"b1","name":"Food","month":"2024-01","value":100}],"expenses":[]}"#,
        ));
        let mut dialog = open_dialog();

        assert!(dialog.request_import(&mut data, &mut notifier, &mut prompt).is_done());
        assert_eq!(data.imports.len(), 1);
        assert!(data.imports[0].0);
        assert_eq!(data.imports[0].1.len(), 1);
        assert_eq!(prompt.asked, vec!["Merge or Replace?"]);
        assert_eq!(notifier.notifications, vec!["Data imported successfully."]);
        assert_eq!(dialog.phase(), DialogPhase::Closed);
    }

    #[test]
    fn test_import_merge() {
        let temp_dir = TempDir::new().unwrap();
        let mut data = StubDataLayer::new(jan());
        let mut notifier = RecordingNotifier::default();
        let mut prompt = ScriptedPrompt::answering(&[MERGE_BUTTON]);
        prompt.open_path = Some(write_file(&temp_dir, r#"{"budgets":[],"expenses":[]}"#));
        let mut dialog = open_dialog();

        assert!(dialog.request_import(&mut data, &mut notifier, &mut prompt).is_done());
        assert!(!data.imports[0].0);
    }

    #[test]
    fn test_import_rejects_empty_object() {
        let temp_dir = TempDir::new().unwrap();
        let mut data = StubDataLayer::new(jan());
        let mut notifier = RecordingNotifier::default();
        let mut prompt = ScriptedPrompt::answering(&[REPLACE_BUTTON]);
        prompt.open_path = Some(write_file(&temp_dir, "{}"));
        let mut dialog = open_dialog();

        assert!(matches!(
            dialog.request_import(&mut data, &mut notifier, &mut prompt),
            SubmitOutcome::Failed(BudgetsError::Import(_))
        ));
        assert_eq!(
            notifier.alerts,
            vec![("Error!".to_string(), PARSE_ERROR_MESSAGE.to_string())]
        );
        assert_eq!(data.calls.import_data, 0);
        assert!(prompt.asked.is_empty());
        assert_eq!(dialog.phase(), DialogPhase::Open);
    }

    #[test]
    fn test_import_cancelled_at_merge_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let mut data = StubDataLayer::new(jan());
        let mut notifier = RecordingNotifier::default();
        let mut prompt = ScriptedPrompt::answering(&[CANCEL_BUTTON]);
        prompt.open_path = Some(write_file(&temp_dir, r#"{"budgets":[]}"#));
        let mut dialog = open_dialog();

        assert!(matches!(
            dialog.request_import(&mut data, &mut notifier, &mut prompt),
            SubmitOutcome::Cancelled
        ));
        assert_eq!(data.calls.import_data, 0);
        assert!(notifier.alerts.is_empty());
    }

    #[test]
    fn test_import_no_file_chosen() {
        let mut data = StubDataLayer::new(jan());
        let mut notifier = RecordingNotifier::default();
        let mut prompt = ScriptedPrompt::default();
        let mut dialog = open_dialog();

        assert!(matches!(
            dialog.request_import(&mut data, &mut notifier, &mut prompt),
            SubmitOutcome::Cancelled
        ));
        assert_eq!(dialog.phase(), DialogPhase::Open);
    }

    #[test]
    fn test_import_while_submitting_is_ignored() {
        let mut data = StubDataLayer::new(jan());
        let mut notifier = RecordingNotifier::default();
        let mut prompt = ScriptedPrompt::answering(&[REPLACE_BUTTON]);
        let mut dialog = open_dialog();
        dialog.phase = DialogPhase::Submitting;

        assert!(matches!(
            dialog.request_import(&mut data, &mut notifier, &mut prompt),
            SubmitOutcome::Ignored
        ));
        assert_eq!(data.calls.import_data, 0);
    }

    #[test]
    fn test_export_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        let budgets = vec![Budget::with_id("b1", "Food", jan(), Money::from_cents(10000))];
        let mut data = StubDataLayer::with_data(jan(), budgets, Vec::new());
        let mut notifier = RecordingNotifier::default();
        let mut prompt = ScriptedPrompt::default();
        prompt.save_path = Some(path.clone());
        let mut dialog = open_dialog();

        assert!(dialog.request_export(&mut data, &mut notifier, &mut prompt).is_done());
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"schemaVersion\": 1"));
        assert!(written.contains("\"Food\""));
        assert!(prompt.default_names[0].starts_with("data-export-"));
        assert!(prompt.default_names[0].ends_with(".json"));
        assert_eq!(notifier.notifications, vec!["Data exported successfully!"]);
        assert_eq!(dialog.phase(), DialogPhase::Open);
    }

    #[test]
    fn test_export_cancelled() {
        let mut data = StubDataLayer::new(jan());
        let mut notifier = RecordingNotifier::default();
        let mut prompt = ScriptedPrompt::default();
        let mut dialog = open_dialog();

        assert!(matches!(
            dialog.request_export(&mut data, &mut notifier, &mut prompt),
            SubmitOutcome::Cancelled
        ));
        assert!(notifier.notifications.is_empty());
    }
}
