//! Budget versus actual
//!
//! Compares each budget for a month against what was actually spent in
//! that category during the month.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{
    Budget, BudgetId, Category, CategoryId, Transaction, YearMonth, NEUTRAL_COLOR,
    UNKNOWN_CATEGORY_NAME,
};

/// Percentage at or above which a budget counts as on track
pub const ON_TRACK_THRESHOLD: f64 = 80.0;

/// Percentage above which a budget counts as over
pub const OVER_THRESHOLD: f64 = 100.0;

/// How spending compares to the budgeted amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    Under,
    OnTrack,
    Over,
}

impl BudgetStatus {
    /// Classify a spent percentage: over 100 is over, below 80 is under,
    /// anything in between (both ends included) is on track
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > OVER_THRESHOLD {
            Self::Over
        } else if percentage < ON_TRACK_THRESHOLD {
            Self::Under
        } else {
            Self::OnTrack
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Under => "under",
            Self::OnTrack => "on-track",
            Self::Over => "over",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Under => write!(f, "Under"),
            Self::OnTrack => write!(f, "On track"),
            Self::Over => write!(f, "Over"),
        }
    }
}

/// One budget compared against actual spending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetComparison {
    pub budget_id: BudgetId,
    pub category_id: CategoryId,
    pub category_name: String,
    pub budgeted: f64,
    pub actual: f64,
    pub percentage: f64,
    pub status: BudgetStatus,
    pub color: String,
}

impl BudgetComparison {
    /// Budgeted minus actual; negative when over
    pub fn remaining(&self) -> f64 {
        self.budgeted - self.actual
    }
}

/// Compare every budget for `month` against that month's expenses
///
/// Output follows the stored order of the budgets. Budgets for other months
/// are ignored. A budget whose category no longer exists is reported under
/// "Unknown" in the neutral color.
pub fn budget_comparisons(
    transactions: &[Transaction],
    categories: &[Category],
    budgets: &[Budget],
    month: YearMonth,
) -> Vec<BudgetComparison> {
    let mut spent: HashMap<&CategoryId, f64> = HashMap::new();
    for txn in transactions
        .iter()
        .filter(|t| t.is_expense() && month.contains(t.date))
    {
        *spent.entry(&txn.category).or_insert(0.0) += txn.amount;
    }

    budgets
        .iter()
        .filter(|b| b.month == month)
        .map(|budget| {
            let category = categories.iter().find(|c| c.id == budget.category_id);
            let actual = spent.get(&budget.category_id).copied().unwrap_or(0.0);
            let percentage = if budget.amount > 0.0 {
                actual / budget.amount * 100.0
            } else {
                0.0
            };

            BudgetComparison {
                budget_id: budget.id.clone(),
                category_id: budget.category_id.clone(),
                category_name: category
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| UNKNOWN_CATEGORY_NAME.to_string()),
                budgeted: budget.amount,
                actual,
                percentage,
                status: BudgetStatus::from_percentage(percentage),
                color: category
                    .map(|c| c.color.clone())
                    .unwrap_or_else(|| NEUTRAL_COLOR.to_string()),
            }
        })
        .collect()
}
