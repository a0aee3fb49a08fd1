//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use super::file_io::{read_json, write_json_atomic};
use super::{lock_poisoned, new_id, next_revision};
use crate::error::BudgetsResult;
use crate::models::{Expense, Month};

#[derive(Debug, Default, Serialize, Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<String, Expense>>,
}

/// Newest first
fn sort_expenses(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> BudgetsResult<()> {
        let file_data: ExpenseData = read_json(&self.path)?;
        let mut data = self.data.write().map_err(lock_poisoned)?;

        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id.clone(), expense);
        }
        Ok(())
    }

    pub fn save(&self) -> BudgetsResult<()> {
        let expenses = self.get_all()?;
        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    pub fn get(&self, id: &str) -> BudgetsResult<Option<Expense>> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.get(id).cloned())
    }

    pub fn get_all(&self) -> BudgetsResult<Vec<Expense>> {
        let data = self.data.read().map_err(lock_poisoned)?;
        let mut expenses: Vec<_> = data.values().cloned().collect();
        sort_expenses(&mut expenses);
        Ok(expenses)
    }

    /// Expenses dated within `month`, newest first
    pub fn get_for_month(&self, month: Month) -> BudgetsResult<Vec<Expense>> {
        let data = self.data.read().map_err(lock_poisoned)?;
        let mut expenses: Vec<_> = data
            .values()
            .filter(|e| month.contains(e.date))
            .cloned()
            .collect();
        sort_expenses(&mut expenses);
        Ok(expenses)
    }

    /// Insert or update an expense, returning it as stored
    pub fn upsert(&self, mut expense: Expense) -> BudgetsResult<Expense> {
        let mut data = self.data.write().map_err(lock_poisoned)?;

        if expense.is_new() {
            expense.id = new_id();
        }
        let previous = data
            .get(&expense.id)
            .and_then(|e| e.revision.clone())
            .or(expense.revision.take());
        expense.revision = Some(next_revision(previous.as_deref()));

        data.insert(expense.id.clone(), expense.clone());
        Ok(expense)
    }

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        (temp_dir, repo)
    }

    fn expense(description: &str, y: i32, m: u32, d: u32) -> Expense {
        Expense::new(
            Money::from_cents(500),
            description,
            "Food",
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    #[test]
    fn test_get_for_month_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(expense("early", 2024, 1, 2)).unwrap();
        repo.upsert(expense("late", 2024, 1, 28)).unwrap();
        repo.upsert(expense("other month", 2024, 2, 1)).unwrap();

        let jan = repo.get_for_month(Month::parse("2024-01").unwrap()).unwrap();
        let descriptions: Vec<_> = jan.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["late", "early"]);
    }

    #[test]
    fn test_upsert_keeps_given_id() {
        let (_temp_dir, repo) = create_test_repo();
        let stored = repo.upsert(expense("x", 2024, 1, 2).with_id("e1")).unwrap();
        assert_eq!(stored.id, "e1");
        assert!(repo.get("e1").unwrap().is_some());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let stored = repo.upsert(expense("Lunch", 2024, 1, 5)).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get_all().unwrap(), vec![stored]);
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(expense("x", 2024, 1, 2)).unwrap();
        repo.clear().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }
}
