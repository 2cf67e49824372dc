//! Aggregation engine
//!
//! Pure functions turning the stored records into the derived views the
//! reports show: monthly spending, spending per category, scalar totals,
//! budget-vs-actual comparisons, rule-based insights and recent activity.
//!
//! Nothing in here reads storage or the clock. Callers sample "today" once
//! and pass it in through [`AnalysisContext`], so every view computed for
//! one report agrees on what the current month is.

pub mod budget;
pub mod categories;
pub mod dashboard;
pub mod insights;
pub mod monthly;
pub mod recent;
pub mod totals;

pub use budget::{budget_comparisons, BudgetComparison, BudgetStatus};
pub use categories::{category_expenses, CategoryExpense};
pub use dashboard::Dashboard;
pub use insights::{financial_insights, FinancialInsight, InsightEngine, InsightKind, InsightRule};
pub use monthly::{monthly_expenses, MonthlyExpense, MONTHLY_WINDOW};
pub use recent::{recent_transactions, DEFAULT_RECENT_COUNT};
pub use totals::{
    current_month_expenses, current_month_income, total_expenses, total_income, Totals,
};

use chrono::NaiveDate;

use crate::models::{Budget, Category, Transaction, YearMonth};

/// Everything an analysis needs: the three record collections and the
/// date treated as "now"
#[derive(Debug, Clone, Copy)]
pub struct AnalysisContext<'a> {
    pub transactions: &'a [Transaction],
    pub categories: &'a [Category],
    pub budgets: &'a [Budget],
    pub today: NaiveDate,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(
        transactions: &'a [Transaction],
        categories: &'a [Category],
        budgets: &'a [Budget],
        today: NaiveDate,
    ) -> Self {
        Self {
            transactions,
            categories,
            budgets,
            today,
        }
    }

    /// The month containing `today`
    pub fn current_month(&self) -> YearMonth {
        YearMonth::of(self.today)
    }
}
