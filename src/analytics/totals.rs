//! Scalar totals
//!
//! All-time and current-month sums of income and expenses.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Kind, Transaction, YearMonth};

fn sum_where(transactions: &[Transaction], kind: Kind, month: Option<YearMonth>) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .filter(|t| month.map_or(true, |m| m.contains(t.date)))
        .map(|t| t.amount)
        .sum()
}

/// Sum of all expense amounts
pub fn total_expenses(transactions: &[Transaction]) -> f64 {
    sum_where(transactions, Kind::Expense, None)
}

/// Sum of all income amounts
pub fn total_income(transactions: &[Transaction]) -> f64 {
    sum_where(transactions, Kind::Income, None)
}

/// Sum of expenses dated within the month containing `today`
pub fn current_month_expenses(transactions: &[Transaction], today: NaiveDate) -> f64 {
    sum_where(transactions, Kind::Expense, Some(YearMonth::of(today)))
}

/// Sum of income dated within the month containing `today`
pub fn current_month_income(transactions: &[Transaction], today: NaiveDate) -> f64 {
    sum_where(transactions, Kind::Income, Some(YearMonth::of(today)))
}

/// The four totals shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_income: f64,
    pub total_expenses: f64,
    pub current_month_income: f64,
    pub current_month_expenses: f64,
}

impl Totals {
    pub fn compute(transactions: &[Transaction], today: NaiveDate) -> Self {
        Self {
            total_income: total_income(transactions),
            total_expenses: total_expenses(transactions),
            current_month_income: current_month_income(transactions, today),
            current_month_expenses: current_month_expenses(transactions, today),
        }
    }

    /// All-time income minus expenses
    pub fn balance(&self) -> f64 {
        self.total_income - self.total_expenses
    }

    /// Current-month income minus expenses
    pub fn current_month_balance(&self) -> f64 {
        self.current_month_income - self.current_month_expenses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::{approx, date, expense, income};

    #[test]
    fn test_empty_totals_are_zero() {
        let totals = Totals::compute(&[], date(2025, 3, 15));
        assert_eq!(totals, Totals::default());
        assert_eq!(totals.balance(), 0.0);
    }

    #[test]
    fn test_all_time_totals() {
        let transactions = vec![
            expense(40.0, date(2024, 12, 31), "1"),
            expense(60.0, date(2025, 3, 1), "2"),
            income(500.0, date(2023, 5, 5), "10"),
        ];

        assert!(approx(total_expenses(&transactions), 100.0));
        assert!(approx(total_income(&transactions), 500.0));
    }

    #[test]
    fn test_current_month_uses_today() {
        let transactions = vec![
            expense(40.0, date(2025, 2, 28), "1"),
            expense(60.0, date(2025, 3, 1), "2"),
            expense(5.0, date(2025, 3, 31), "2"),
            expense(7.0, date(2024, 3, 10), "2"),
            income(1000.0, date(2025, 3, 2), "10"),
            income(300.0, date(2025, 4, 1), "11"),
        ];
        let today = date(2025, 3, 15);

        assert!(approx(current_month_expenses(&transactions, today), 65.0));
        assert!(approx(current_month_income(&transactions, today), 1000.0));

        let totals = Totals::compute(&transactions, today);
        assert!(approx(totals.current_month_balance(), 935.0));
        assert!(approx(totals.balance(), 1300.0 - 112.0));
    }
}
