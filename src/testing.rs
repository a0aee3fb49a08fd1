//! In-memory stand-ins for the capability bundle, used by unit tests

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;

use crate::dialogs::prompt::{MessageBox, Prompt};
use crate::error::{BudgetsError, BudgetsResult};
use crate::models::{Budget, Expense, Month, Setting, SettingName};
use crate::services::{DataLayer, DataSet, LoadOptions, Notifier};

/// How many times each data layer method was called
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CallCounts {
    pub load_data: usize,
    pub save_budget: usize,
    pub save_expense: usize,
    pub delete_budget: usize,
    pub delete_expense: usize,
    pub save_setting: usize,
    pub import_data: usize,
    pub export_all_data: usize,
    pub delete_all_data: usize,
}

/// Data layer returning canned data and recording every write
#[derive(Debug)]
pub struct StubDataLayer {
    pub month: Month,
    pub budgets: Vec<Budget>,
    pub expenses: Vec<Expense>,
    pub settings: HashMap<SettingName, String>,
    pub fail_all: bool,
    pub calls: CallCounts,
    pub saved_budgets: Vec<Budget>,
    pub saved_expenses: Vec<Expense>,
    pub deleted_ids: Vec<String>,
    pub saved_settings: Vec<Setting>,
    pub imports: Vec<(bool, Vec<Budget>, Vec<Expense>)>,
    pub last_load: Option<LoadOptions>,
}

impl StubDataLayer {
    pub fn new(month: Month) -> Self {
        Self {
            month,
            budgets: Vec::new(),
            expenses: Vec::new(),
            settings: HashMap::new(),
            fail_all: false,
            calls: CallCounts::default(),
            saved_budgets: Vec::new(),
            saved_expenses: Vec::new(),
            deleted_ids: Vec::new(),
            saved_settings: Vec::new(),
            imports: Vec::new(),
            last_load: None,
        }
    }

    pub fn with_data(month: Month, budgets: Vec<Budget>, expenses: Vec<Expense>) -> Self {
        let mut stub = Self::new(month);
        stub.budgets = budgets;
        stub.expenses = expenses;
        stub
    }

    fn check(&self) -> BudgetsResult<()> {
        if self.fail_all {
            Err(BudgetsError::Storage("stub failure".into()))
        } else {
            Ok(())
        }
    }
}

impl DataLayer for StubDataLayer {
    fn load_data(&mut self, options: LoadOptions) -> BudgetsResult<()> {
        self.calls.load_data += 1;
        self.last_load = Some(options);
        self.check()?;
        if let Some(month) = options.month_to_load {
            self.month = month;
        }
        Ok(())
    }

    fn month_in_view(&self) -> Month {
        self.month
    }

    fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    fn save_budget(&mut self, budget: Budget) -> BudgetsResult<()> {
        self.calls.save_budget += 1;
        self.check()?;
        self.saved_budgets.push(budget);
        Ok(())
    }

    fn save_expense(&mut self, expense: Expense) -> BudgetsResult<()> {
        self.calls.save_expense += 1;
        self.check()?;
        self.saved_expenses.push(expense);
        Ok(())
    }

    fn delete_budget(&mut self, budget_id: &str) -> BudgetsResult<()> {
        self.calls.delete_budget += 1;
        self.check()?;
        self.deleted_ids.push(budget_id.to_string());
        Ok(())
    }

    fn delete_expense(&mut self, expense_id: &str) -> BudgetsResult<()> {
        self.calls.delete_expense += 1;
        self.check()?;
        self.deleted_ids.push(expense_id.to_string());
        Ok(())
    }

    fn get_setting(&self, name: SettingName) -> String {
        self.settings.get(&name).cloned().unwrap_or_default()
    }

    fn save_setting(&mut self, setting: Setting) -> BudgetsResult<()> {
        self.calls.save_setting += 1;
        self.check()?;
        self.settings.insert(setting.name, setting.value.clone());
        self.saved_settings.push(setting);
        Ok(())
    }

    fn import_data(
        &mut self,
        replace: bool,
        budgets: Vec<Budget>,
        expenses: Vec<Expense>,
    ) -> BudgetsResult<()> {
        self.calls.import_data += 1;
        self.check()?;
        self.imports.push((replace, budgets, expenses));
        Ok(())
    }

    fn export_all_data(&self) -> BudgetsResult<DataSet> {
        self.check()?;
        Ok(DataSet {
            budgets: self.budgets.clone(),
            expenses: self.expenses.clone(),
        })
    }

    fn delete_all_data(&mut self) -> BudgetsResult<()> {
        self.calls.delete_all_data += 1;
        self.check()?;
        self.budgets.clear();
        self.expenses.clear();
        self.settings.clear();
        Ok(())
    }
}

/// Notifier that remembers what it was asked to show
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub alerts: Vec<(String, String)>,
    pub notifications: Vec<String>,
    pub hidden: usize,
}

impl Notifier for RecordingNotifier {
    fn show_alert(&mut self, title: &str, message: &str) {
        self.alerts.push((title.to_string(), message.to_string()));
    }

    fn show_notification(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn hide_notifications(&mut self) {
        self.hidden += 1;
    }
}

/// Prompt that answers from a script
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    pub answers: VecDeque<usize>,
    pub open_path: Option<PathBuf>,
    pub save_path: Option<PathBuf>,
    pub asked: Vec<String>,
    pub default_names: Vec<String>,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[usize]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn message_box(&mut self, request: &MessageBox) -> usize {
        self.asked.push(request.title.to_string());
        self.answers.pop_front().unwrap_or(request.cancel_id)
    }

    fn open_file(&mut self, _title: &str) -> Option<PathBuf> {
        self.open_path.clone()
    }

    fn save_file(&mut self, _title: &str, default_name: &str) -> Option<PathBuf> {
        self.default_names.push(default_name.to_string());
        self.save_path.clone()
    }
}
