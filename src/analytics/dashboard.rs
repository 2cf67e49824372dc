//! Dashboard
//!
//! Every derived view bundled together, computed from one context so all
//! parts agree on the current month.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Transaction, YearMonth};

use super::budget::{budget_comparisons, BudgetComparison};
use super::categories::{category_expenses, CategoryExpense};
use super::insights::{financial_insights, FinancialInsight};
use super::monthly::{monthly_expenses, MonthlyExpense};
use super::recent::recent_transactions;
use super::totals::Totals;
use super::AnalysisContext;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub generated_for: NaiveDate,
    pub current_month: YearMonth,
    pub totals: Totals,
    pub monthly_expenses: Vec<MonthlyExpense>,
    pub category_expenses: Vec<CategoryExpense>,
    pub budget_comparisons: Vec<BudgetComparison>,
    pub insights: Vec<FinancialInsight>,
    pub recent_transactions: Vec<Transaction>,
}

impl Dashboard {
    pub fn build(ctx: &AnalysisContext<'_>, recent_count: usize) -> Self {
        let current_month = ctx.current_month();

        Self {
            generated_for: ctx.today,
            current_month,
            totals: Totals::compute(ctx.transactions, ctx.today),
            monthly_expenses: monthly_expenses(ctx.transactions),
            category_expenses: category_expenses(ctx.transactions, ctx.categories),
            budget_comparisons: budget_comparisons(
                ctx.transactions,
                ctx.categories,
                ctx.budgets,
                current_month,
            ),
            insights: financial_insights(ctx),
            recent_transactions: recent_transactions(ctx.transactions, recent_count),
        }
    }

    /// Whether there is nothing recorded at all
    pub fn is_empty(&self) -> bool {
        self.monthly_expenses.is_empty()
            && self.category_expenses.is_empty()
            && self.recent_transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::{budget, categories, date, expense, income, month};

    #[test]
    fn test_empty_dashboard() {
        let cats = categories();
        let ctx = AnalysisContext::new(&[], &cats, &[], date(2025, 3, 15));
        let dashboard = Dashboard::build(&ctx, 5);

        assert!(dashboard.is_empty());
        assert_eq!(dashboard.totals, Totals::default());
        assert!(dashboard.insights.is_empty());
        assert!(dashboard.budget_comparisons.is_empty());
        assert_eq!(dashboard.current_month, month("2025-03"));
    }

    #[test]
    fn test_dashboard_uses_current_month_budgets() {
        let cats = categories();
        let transactions = vec![
            income(1000.0, date(2025, 3, 1), "10"),
            expense(60.0, date(2025, 3, 2), "1"),
        ];
        let budgets = vec![budget("1", 100.0, "2025-03"), budget("2", 50.0, "2025-02")];
        let ctx = AnalysisContext::new(&transactions, &cats, &budgets, date(2025, 3, 15));

        let dashboard = Dashboard::build(&ctx, 1);
        assert_eq!(dashboard.budget_comparisons.len(), 1);
        assert_eq!(dashboard.recent_transactions.len(), 1);
        assert_eq!(dashboard.monthly_expenses.len(), 1);
        assert_eq!(dashboard.insights[0].title, "Monthly Surplus");

        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["currentMonth"], "2025-03");
        assert_eq!(json["budgetComparisons"][0]["status"], "under");
    }
}
