//! Storage layer for budgets-cli
//!
//! A local data layer backed by JSON files with atomic writes. Each entity
//! type has its own repository; `Storage` ties them together and keeps the
//! month in view.

pub mod budgets;
pub mod expenses;
pub mod file_io;
pub mod settings;

pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use settings::SettingsRepository;

use std::sync::PoisonError;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::paths::BudgetsPaths;
use crate::error::{BudgetsError, BudgetsResult};
use crate::models::{Budget, Expense, Month, Setting, SettingName};
use crate::services::{DataLayer, DataSet, LoadOptions};

pub(crate) fn lock_poisoned<T>(e: PoisonError<T>) -> BudgetsError {
    BudgetsError::Storage(format!("Failed to acquire lock: {}", e))
}

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Revision after `previous`: "<n+1>-<8 hex digits>"
pub(crate) fn next_revision(previous: Option<&str>) -> String {
    let n = previous
        .and_then(|rev| rev.split_once('-'))
        .and_then(|(n, _)| n.parse::<u64>().ok())
        .unwrap_or(0);
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", n + 1, &suffix[..8])
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BudgetsPaths,
    pub budgets: BudgetRepository,
    pub expenses: ExpenseRepository,
    pub settings: SettingsRepository,
    loaded: bool,
    month_in_view: Month,
    budgets_in_view: Vec<Budget>,
    expenses_in_view: Vec<Expense>,
}

impl Storage {
    /// Create a new Storage instance looking at the current month
    pub fn new(paths: BudgetsPaths) -> BudgetsResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            budgets: BudgetRepository::new(paths.budgets_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            settings: SettingsRepository::new(paths.settings_file()),
            paths,
            loaded: false,
            month_in_view: Month::current(),
            budgets_in_view: Vec::new(),
            expenses_in_view: Vec::new(),
        })
    }

    pub fn paths(&self) -> &BudgetsPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> BudgetsResult<()> {
        self.budgets.load()?;
        self.expenses.load()?;
        self.settings.load()?;
        self.loaded = true;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> BudgetsResult<()> {
        self.budgets.save()?;
        self.expenses.save()?;
        self.settings.save()?;
        Ok(())
    }

    fn ensure_loaded(&mut self) -> BudgetsResult<()> {
        if !self.loaded {
            self.load_all()?;
        }
        Ok(())
    }

    fn refresh_view(&mut self) -> BudgetsResult<()> {
        self.budgets_in_view = self.budgets.get_for_month(self.month_in_view)?;
        self.expenses_in_view = self.expenses.get_for_month(self.month_in_view)?;
        Ok(())
    }
}

impl DataLayer for Storage {
    fn load_data(&mut self, options: LoadOptions) -> BudgetsResult<()> {
        if options.force_reload {
            self.load_all()?;
        } else {
            self.ensure_loaded()?;
        }
        if let Some(month) = options.month_to_load {
            self.month_in_view = month;
        }
        debug!(month = %self.month_in_view, force = options.force_reload, "loading data");
        self.refresh_view()
    }

    fn month_in_view(&self) -> Month {
        self.month_in_view
    }

    fn budgets(&self) -> &[Budget] {
        &self.budgets_in_view
    }

    fn expenses(&self) -> &[Expense] {
        &self.expenses_in_view
    }

    fn save_budget(&mut self, budget: Budget) -> BudgetsResult<()> {
        self.ensure_loaded()?;
        budget
            .validate()
            .map_err(|e| BudgetsError::Validation(e.to_string()))?;
        if !budget.is_new() && self.budgets.get(&budget.id)?.is_none() {
            return Err(BudgetsError::budget_not_found(budget.id));
        }

        let stored = self.budgets.upsert(budget)?;
        self.budgets.save()?;
        debug!(id = %stored.id, rev = ?stored.revision, "budget saved");
        self.refresh_view()
    }

    fn save_expense(&mut self, expense: Expense) -> BudgetsResult<()> {
        self.ensure_loaded()?;
        expense
            .validate()
            .map_err(|e| BudgetsError::Validation(e.to_string()))?;
        if !expense.is_new() && self.expenses.get(&expense.id)?.is_none() {
            return Err(BudgetsError::expense_not_found(expense.id));
        }

        let stored = self.expenses.upsert(expense)?;
        self.expenses.save()?;
        debug!(id = %stored.id, rev = ?stored.revision, "expense saved");
        self.refresh_view()
    }

    fn delete_budget(&mut self, budget_id: &str) -> BudgetsResult<()> {
        self.ensure_loaded()?;
        if !self.budgets.delete(budget_id)? {
            return Err(BudgetsError::budget_not_found(budget_id));
        }
        self.budgets.save()?;
        self.refresh_view()
    }

    fn delete_expense(&mut self, expense_id: &str) -> BudgetsResult<()> {
        self.ensure_loaded()?;
        if !self.expenses.delete(expense_id)? {
            return Err(BudgetsError::expense_not_found(expense_id));
        }
        self.expenses.save()?;
        self.refresh_view()
    }

    fn get_setting(&self, name: SettingName) -> String {
        match self.settings.get(name) {
            Ok(value) => value.unwrap_or_default(),
            Err(err) => {
                warn!(error = %err, setting = %name, "could not read setting");
                String::new()
            }
        }
    }

    fn save_setting(&mut self, setting: Setting) -> BudgetsResult<()> {
        self.ensure_loaded()?;
        self.settings.set(setting)?;
        self.settings.save()
    }

    fn import_data(
        &mut self,
        replace: bool,
        budgets: Vec<Budget>,
        expenses: Vec<Expense>,
    ) -> BudgetsResult<()> {
        self.ensure_loaded()?;
        if replace {
            self.budgets.clear()?;
            self.expenses.clear()?;
        }

        let (budget_count, expense_count) = (budgets.len(), expenses.len());
        for budget in budgets {
            self.budgets.upsert(budget)?;
        }
        for expense in expenses {
            self.expenses.upsert(expense)?;
        }

        self.budgets.save()?;
        self.expenses.save()?;
        info!(replace, budget_count, expense_count, "data imported");
        self.refresh_view()
    }

    fn export_all_data(&self) -> BudgetsResult<DataSet> {
        Ok(DataSet {
            budgets: self.budgets.get_all()?,
            expenses: self.expenses.get_all()?,
        })
    }

    fn delete_all_data(&mut self) -> BudgetsResult<()> {
        self.budgets.clear()?;
        self.expenses.clear()?;
        self.settings.clear()?;
        self.save_all()?;
        self.loaded = true;
        info!("all data deleted");
        self.refresh_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetsPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage
            .load_data(LoadOptions::month(jan()))
            .unwrap();
        (temp_dir, storage)
    }

    fn jan() -> Month {
        Month::parse("2024-01").unwrap()
    }

    fn lunch(day: u32) -> Expense {
        Expense::new(
            Money::from_cents(1200),
            "Lunch",
            "Food",
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        )
    }

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetsPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.month_in_view(), Month::current());
    }

    #[test]
    fn test_next_revision() {
        assert!(next_revision(None).starts_with("1-"));
        assert!(next_revision(Some("7-abcdef01")).starts_with("8-"));
        assert!(next_revision(Some("garbage")).starts_with("1-"));
        assert_eq!(next_revision(None).len(), 10);
    }

    #[test]
    fn test_save_budget_updates_view() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage
            .save_budget(Budget::new("Food", jan(), Money::from_cents(10000)))
            .unwrap();
        storage
            .save_budget(Budget::new("Later", jan().next(), Money::zero()))
            .unwrap();

        assert_eq!(storage.budgets().len(), 1);
        assert_eq!(storage.budgets()[0].name, "Food");
    }

    #[test]
    fn test_update_unknown_budget_is_not_found() {
        let (_temp_dir, mut storage) = create_test_storage();
        let err = storage
            .save_budget(Budget::with_id("nope", "Food", jan(), Money::zero()))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_negative_cost_rejected() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut expense = lunch(3);
        expense.cost = Money::from_cents(-1);
        assert!(storage.save_expense(expense).unwrap_err().is_validation());
    }

    #[test]
    fn test_navigation_changes_view() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage.save_expense(lunch(3)).unwrap();
        assert_eq!(storage.expenses().len(), 1);

        storage.load_data(LoadOptions::month(jan().next())).unwrap();
        assert!(storage.expenses().is_empty());
        assert_eq!(storage.month_in_view(), jan().next());
    }

    #[test]
    fn test_delete_expense() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage.save_expense(lunch(3)).unwrap();
        let id = storage.expenses()[0].id.clone();

        storage.delete_expense(&id).unwrap();
        assert!(storage.expenses().is_empty());
        assert!(storage.delete_expense(&id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_settings_default_empty() {
        let (_temp_dir, mut storage) = create_test_storage();
        assert_eq!(storage.get_setting(SettingName::SyncToken), "");

        storage
            .save_setting(Setting::new(SettingName::SyncToken, "abc"))
            .unwrap();
        assert_eq!(storage.get_setting(SettingName::SyncToken), "abc");
    }

    #[test]
    fn test_import_merge_upserts_by_id() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage
            .import_data(
                false,
                vec![Budget::with_id("b1", "Food", jan(), Money::from_cents(100))],
                vec![lunch(3).with_id("e1")],
            )
            .unwrap();
        storage
            .import_data(
                false,
                vec![Budget::with_id("b1", "Food", jan(), Money::from_cents(200))],
                vec![lunch(4)],
            )
            .unwrap();

        assert_eq!(storage.budgets().len(), 1);
        assert_eq!(storage.budgets()[0].value, Money::from_cents(200));
        assert_eq!(storage.expenses().len(), 2);
    }

    #[test]
    fn test_import_replace_discards_existing() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage.save_expense(lunch(3)).unwrap();
        storage
            .import_data(true, Vec::new(), vec![lunch(9).with_id("e9")])
            .unwrap();

        assert_eq!(storage.expenses().len(), 1);
        assert_eq!(storage.expenses()[0].id, "e9");
    }

    #[test]
    fn test_export_then_replace_reproduces_data() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage
            .save_budget(Budget::new("Food", jan(), Money::from_cents(10000)))
            .unwrap();
        storage.save_expense(lunch(3)).unwrap();
        let exported = storage.export_all_data().unwrap();

        storage
            .import_data(true, exported.budgets.clone(), exported.expenses.clone())
            .unwrap();
        let again = storage.export_all_data().unwrap();

        let ids = |d: &DataSet| {
            (
                d.budgets.iter().map(|b| (b.id.clone(), b.value)).collect::<Vec<_>>(),
                d.expenses.iter().map(|e| (e.id.clone(), e.cost)).collect::<Vec<_>>(),
            )
        };
        assert_eq!(ids(&exported), ids(&again));
    }

    #[test]
    fn test_data_survives_restart() {
        let (temp_dir, mut storage) = create_test_storage();
        storage
            .save_budget(Budget::new("Food", jan(), Money::from_cents(10000)))
            .unwrap();

        let paths = BudgetsPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_data(LoadOptions::month(jan())).unwrap();
        assert_eq!(reopened.budgets().len(), 1);
    }

    #[test]
    fn test_delete_all_data() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage.save_expense(lunch(3)).unwrap();
        storage
            .save_setting(Setting::new(SettingName::Currency, "EUR"))
            .unwrap();

        storage.delete_all_data().unwrap();
        assert!(storage.expenses().is_empty());
        assert_eq!(storage.get_setting(SettingName::Currency), "");
    }
}
