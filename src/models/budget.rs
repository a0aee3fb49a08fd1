//! Budget model
//!
//! A budget is a named spending limit for one month. Expenses refer to a
//! budget by its name, not its id.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::Month;

/// Id that tells the data layer to create a new budget instead of updating one
pub const NEW_BUDGET_ID: &str = "newBudget";

/// A monthly spending limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Opaque identifier ("newBudget" or empty for a budget not yet saved)
    #[serde(default)]
    pub id: String,

    /// Display name; expenses match against it
    pub name: String,

    /// The month this budget applies to
    pub month: Month,

    /// Spending limit
    pub value: Money,

    /// Storage revision
    #[serde(rename = "_rev", default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

impl Budget {
    /// Create a budget that has not been saved yet
    pub fn new(name: impl Into<String>, month: Month, value: Money) -> Self {
        Self {
            id: NEW_BUDGET_ID.to_string(),
            name: name.into(),
            month,
            value,
            revision: None,
        }
    }

    /// Create a budget with a known id (e.g. when editing)
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        month: Month,
        value: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            month,
            value,
            revision: None,
        }
    }

    /// Whether this budget still needs an id assigned by the data layer
    pub fn is_new(&self) -> bool {
        self.id.is_empty() || self.id == NEW_BUDGET_ID
    }

    /// Validate the budget before it is persisted
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.name.trim().is_empty() {
            return Err(BudgetValidationError::EmptyName);
        }
        if self.value.is_negative() {
            return Err(BudgetValidationError::NegativeValue);
        }
        if !self.value.is_in_range() {
            return Err(BudgetValidationError::ValueTooLarge);
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.month, self.value)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyName,
    NegativeValue,
    ValueTooLarge,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Budget name cannot be empty"),
            Self::NegativeValue => write!(f, "Budget value cannot be negative"),
            Self::ValueTooLarge => write!(f, "Budget value is too large"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan() -> Month {
        Month::parse("2024-01").unwrap()
    }

    #[test]
    fn test_new_budget_uses_sentinel_id() {
        let budget = Budget::new("Food", jan(), Money::from_cents(10000));
        assert_eq!(budget.id, NEW_BUDGET_ID);
        assert!(budget.is_new());
        assert!(Budget::with_id("", "Food", jan(), Money::zero()).is_new());
        assert!(!Budget::with_id("abc", "Food", jan(), Money::zero()).is_new());
    }

    #[test]
    fn test_validation() {
        let mut budget = Budget::new("Food", jan(), Money::from_cents(100));
        assert!(budget.validate().is_ok());

        budget.name = "  ".into();
        assert_eq!(budget.validate(), Err(BudgetValidationError::EmptyName));

        budget.name = "Food".into();
        budget.value = Money::from_cents(-1);
        assert_eq!(budget.validate(), Err(BudgetValidationError::NegativeValue));

        budget.value = Money::from_cents(i64::MAX);
        assert_eq!(budget.validate(), Err(BudgetValidationError::ValueTooLarge));
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{"id":"b1","name":"Food","month":"2024-01","value":150.5,"_rev":"1-abc"}"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.value.cents(), 15050);
        assert_eq!(budget.revision.as_deref(), Some("1-abc"));

        let out = serde_json::to_value(&budget).unwrap();
        assert_eq!(out["month"], "2024-01");
        assert_eq!(out["_rev"], "1-abc");
    }

    #[test]
    fn test_missing_revision_is_not_serialized() {
        let budget = Budget::with_id("b1", "Food", jan(), Money::from_cents(100));
        let out = serde_json::to_value(&budget).unwrap();
        assert!(out.get("_rev").is_none());
    }
}
