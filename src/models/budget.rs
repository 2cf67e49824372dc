//! Monthly budget model
//!
//! A spending limit for one category in one month. The store keeps at most
//! one budget per (category, month).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, CategoryId};
use super::month::YearMonth;

/// A budget for a specific category in a specific month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// The category this budget limits
    pub category_id: CategoryId,

    /// Budgeted amount
    pub amount: f64,

    /// The month this budget applies to
    pub month: YearMonth,

    /// When this budget was created
    pub created_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget
    pub fn new(category_id: impl Into<CategoryId>, amount: f64, month: YearMonth) -> Self {
        Self {
            id: BudgetId::generate(),
            category_id: category_id.into(),
            amount,
            month,
            created_at: Utc::now(),
        }
    }

    /// Whether this budget is for the given (category, month) pair
    pub fn is_for(&self, category_id: &CategoryId, month: YearMonth) -> bool {
        &self.category_id == category_id && self.month == month
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(BudgetValidationError::NonPositiveAmount);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} budgeted: {:.2}", self.month, self.amount)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveAmount,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Budget amount must be greater than zero"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
