//! Budget repository for JSON storage
//!
//! Manages loading and saving budgets to budgets.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use super::file_io::{read_json, write_json_atomic};
use super::{lock_poisoned, new_id, next_revision};
use crate::error::BudgetsResult;
use crate::models::{Budget, Month};

#[derive(Debug, Default, Serialize, Deserialize)]
struct BudgetData {
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<HashMap<String, Budget>>,
}

fn sort_budgets(budgets: &mut [Budget]) {
    budgets.sort_by(|a, b| {
        a.month
            .cmp(&b.month)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> BudgetsResult<()> {
        let file_data: BudgetData = read_json(&self.path)?;
        let mut data = self.data.write().map_err(lock_poisoned)?;

        data.clear();
        for budget in file_data.budgets {
            data.insert(budget.id.clone(), budget);
        }
        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> BudgetsResult<()> {
        let budgets = self.get_all()?;
        write_json_atomic(&self.path, &BudgetData { budgets })
    }

    pub fn get(&self, id: &str) -> BudgetsResult<Option<Budget>> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.get(id).cloned())
    }

    /// All budgets, by month then name
    pub fn get_all(&self) -> BudgetsResult<Vec<Budget>> {
        let data = self.data.read().map_err(lock_poisoned)?;
        let mut budgets: Vec<_> = data.values().cloned().collect();
        sort_budgets(&mut budgets);
        Ok(budgets)
    }

    /// Budgets of one month, by name
    pub fn get_for_month(&self, month: Month) -> BudgetsResult<Vec<Budget>> {
        let data = self.data.read().map_err(lock_poisoned)?;
        let mut budgets: Vec<_> = data
            .values()
            .filter(|b| b.month == month)
            .cloned()
            .collect();
        sort_budgets(&mut budgets);
        Ok(budgets)
    }

    /// Insert or update a budget, returning it as stored
    ///
    /// New budgets get a fresh id; every write bumps the revision.
    pub fn upsert(&self, mut budget: Budget) -> BudgetsResult<Budget> {
        let mut data = self.data.write().map_err(lock_poisoned)?;

        if budget.is_new() {
            budget.id = new_id();
        }
        let previous = data
            .get(&budget.id)
            .and_then(|b| b.revision.clone())
            .or(budget.revision.take());
        budget.revision = Some(next_revision(previous.as_deref()));

        data.insert(budget.id.clone(), budget.clone());
        Ok(budget)
    }

    /// Delete a budget; `false` if it did not exist
    pub fn delete(&self, id: &str) -> BudgetsResult<bool> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        Ok(data.remove(id).is_some())
    }

    pub fn clear(&self) -> BudgetsResult<()> {
        self.data.write().map_err(lock_poisoned)?.clear();
        Ok(())
    }

    pub fn count(&self) -> BudgetsResult<usize> {
        Ok(self.data.read().map_err(lock_poisoned)?.len())
    }
}
