//! Category expense summary
//!
//! Expenses grouped by category for the spending breakdown chart.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Category, CategoryId, Transaction, NEUTRAL_COLOR, UNKNOWN_CATEGORY_NAME};

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryExpense {
    /// Resolved category, or `None` for the Unknown bucket
    pub category_id: Option<CategoryId>,
    /// Display name
    pub category: String,
    /// Summed expense amount
    pub amount: f64,
    /// Number of expense transactions
    pub count: usize,
    /// Display color
    pub color: String,
}

impl CategoryExpense {
    /// Whether this row collects references to missing categories
    pub fn is_unknown(&self) -> bool {
        self.category_id.is_none()
    }

    /// This row's share of `total`, as a percentage
    pub fn share_of(&self, total: f64) -> f64 {
        if total > 0.0 {
            self.amount / total * 100.0
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Bucket<'a> {
    Known(&'a CategoryId),
    Unknown,
}

/// Sum expenses per category, largest first
///
/// Transactions whose category cannot be resolved all land in a single
/// "Unknown" row. Rows with equal amounts keep the order in which their
/// category was first seen. If two categories share an id, the first wins.
pub fn category_expenses(
    transactions: &[Transaction],
    categories: &[Category],
) -> Vec<CategoryExpense> {
    let mut lookup: HashMap<&CategoryId, &Category> = HashMap::new();
    for category in categories {
        lookup.entry(&category.id).or_insert(category);
    }

    let mut rows: Vec<CategoryExpense> = Vec::new();
    let mut index: HashMap<Bucket<'_>, usize> = HashMap::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let category = lookup.get(&txn.category).copied();
        let bucket = match category {
            Some(c) => Bucket::Known(&c.id),
            None => Bucket::Unknown,
        };

        let idx = *index.entry(bucket).or_insert_with(|| {
            rows.push(match category {
                Some(c) => CategoryExpense {
                    category_id: Some(c.id.clone()),
                    category: c.name.clone(),
                    amount: 0.0,
                    count: 0,
                    color: c.color.clone(),
                },
                None => CategoryExpense {
                    category_id: None,
                    category: UNKNOWN_CATEGORY_NAME.to_string(),
                    amount: 0.0,
                    count: 0,
                    color: NEUTRAL_COLOR.to_string(),
                },
            });
            rows.len() - 1
        });

        rows[idx].amount += txn.amount;
        rows[idx].count += 1;
    }

    // sort_by is stable: ties stay in first-seen order
    rows.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::{approx, categories, date, expense, income};
    use crate::analytics::total_expenses;

    #[test]
    fn test_empty() {
        assert!(category_expenses(&[], &categories()).is_empty());
    }

    #[test]
    fn test_sorted_descending_with_names_and_colors() {
        let day = date(2025, 1, 10);
        let transactions = vec![
            expense(20.0, day, "2"),
            expense(50.0, day, "1"),
            expense(5.0, day, "2"),
            income(900.0, day, "10"),
        ];

        let rows = category_expenses(&transactions, &categories());
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].category, "Food & Dining");
        assert_eq!(rows[0].color, "#ef4444");
        assert!(approx(rows[0].amount, 50.0));
        assert_eq!(rows[0].count, 1);

        assert_eq!(rows[1].category, "Transportation");
        assert!(approx(rows[1].amount, 25.0));
        assert_eq!(rows[1].count, 2);
    }

    #[test]
    fn test_dangling_references_collapse_to_unknown() {
        let day = date(2025, 1, 10);
        let transactions = vec![
            expense(10.0, day, "deleted-a"),
            expense(30.0, day, "1"),
            expense(15.0, day, "deleted-b"),
        ];

        let rows = category_expenses(&transactions, &categories());
        assert_eq!(rows.len(), 2);

        let unknown = rows.iter().find(|r| r.is_unknown()).unwrap();
        assert_eq!(unknown.category, UNKNOWN_CATEGORY_NAME);
        assert_eq!(unknown.color, NEUTRAL_COLOR);
        assert!(approx(unknown.amount, 25.0));
        assert_eq!(unknown.count, 2);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let day = date(2025, 1, 10);
        let transactions = vec![
            expense(10.0, day, "3"),
            expense(10.0, day, "1"),
            expense(10.0, day, "2"),
        ];

        let names: Vec<_> = category_expenses(&transactions, &categories())
            .into_iter()
            .map(|r| r.category)
            .collect();
        assert_eq!(names, vec!["Shopping", "Food & Dining", "Transportation"]);
    }

    #[test]
    fn test_duplicate_category_id_uses_first() {
        let mut cats = categories();
        let mut shadow = cats[0].clone();
        shadow.name = "Groceries".to_string();
        cats.push(shadow);

        let rows = category_expenses(&[expense(10.0, date(2025, 1, 10), "1")], &cats);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "Food & Dining");
    }

    #[test]
    fn test_rows_sum_to_total_expenses() {
        let day = date(2025, 1, 10);
        let transactions = vec![
            expense(12.25, day, "1"),
            expense(7.75, day, "4"),
            expense(3.0, day, "missing"),
            expense(100.0, date(2024, 6, 1), "5"),
            income(50.0, day, "11"),
        ];

        let rows = category_expenses(&transactions, &categories());
        assert!(rows.windows(2).all(|w| w[0].amount >= w[1].amount));

        let summed: f64 = rows.iter().map(|r| r.amount).sum();
        assert!(approx(summed, total_expenses(&transactions)));
    }

    #[test]
    fn test_share_of() {
        let row = CategoryExpense {
            category_id: None,
            category: UNKNOWN_CATEGORY_NAME.to_string(),
            amount: 45.0,
            count: 1,
            color: NEUTRAL_COLOR.to_string(),
        };
        assert!(approx(row.share_of(100.0), 45.0));
        assert_eq!(row.share_of(0.0), 0.0);
    }
}
