//! Expense model
//!
//! An expense is a dated cost attributed to a budget by name. The name is a
//! loose reference: nothing forces it to match an existing budget.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::Month;

/// Id that tells the data layer to create a new expense instead of updating one
pub const NEW_EXPENSE_ID: &str = "newExpense";

/// Budget name shown for expenses that match no budget
pub const UNBUDGETED_NAME: &str = "Misc";

/// A single cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Opaque identifier ("newExpense" or empty for an expense not yet saved)
    #[serde(default)]
    pub id: String,

    /// Amount spent
    pub cost: Money,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Name of the budget this expense counts against
    #[serde(default)]
    pub budget: String,

    /// When the money was spent
    pub date: NaiveDate,

    /// Storage revision
    #[serde(rename = "_rev", default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

impl Expense {
    /// Create an expense that has not been saved yet
    pub fn new(
        cost: Money,
        description: impl Into<String>,
        budget: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: NEW_EXPENSE_ID.to_string(),
            cost,
            description: description.into(),
            budget: budget.into(),
            date,
            revision: None,
        }
    }

    /// Set an explicit id (e.g. when editing)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Whether this expense still needs an id assigned by the data layer
    pub fn is_new(&self) -> bool {
        self.id.is_empty() || self.id == NEW_EXPENSE_ID
    }

    /// The month this expense falls in
    pub fn month(&self) -> Month {
        Month::of(self.date)
    }

    /// Validate the expense before it is persisted
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.cost.is_negative() {
            return Err(ExpenseValidationError::NegativeCost);
        }
        if !self.cost.is_in_range() {
            return Err(ExpenseValidationError::CostTooLarge);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}]",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.cost,
            self.budget
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeCost,
    CostTooLarge,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCost => write!(f, "Expense cost cannot be negative"),
            Self::CostTooLarge => write!(f, "Expense cost is too large"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
