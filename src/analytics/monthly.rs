//! Monthly expense summary
//!
//! Expenses grouped by calendar month for the spending-over-time chart.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Transaction, YearMonth};

/// How many months the summary keeps (the most recent ones)
pub const MONTHLY_WINDOW: usize = 12;

/// Spending in one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpense {
    /// The calendar month; this is the sort key
    pub period: YearMonth,
    /// Chart label, e.g. "Jan 2024"
    pub month: String,
    /// Summed expense amount
    pub amount: f64,
    /// Number of expense transactions
    pub count: usize,
}

/// Sum expenses per calendar month
///
/// Months are ordered chronologically by year then month (the label is
/// never used for ordering) and only the last [`MONTHLY_WINDOW`] months
/// with any expense are kept.
pub fn monthly_expenses(transactions: &[Transaction]) -> Vec<MonthlyExpense> {
    let mut by_month: BTreeMap<YearMonth, (f64, usize)> = BTreeMap::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let entry = by_month.entry(txn.month()).or_insert((0.0, 0));
        entry.0 += txn.amount;
        entry.1 += 1;
    }

    let skip = by_month.len().saturating_sub(MONTHLY_WINDOW);

    by_month
        .into_iter()
        .skip(skip)
        .map(|(period, (amount, count))| MonthlyExpense {
            period,
            month: period.label(),
            amount,
            count,
        })
        .collect()
}
