//! Recent activity

use crate::models::Transaction;

/// How many recent transactions the dashboard shows by default
pub const DEFAULT_RECENT_COUNT: usize = 5;

/// The `count` most recently recorded transactions, newest first
///
/// Ordered by creation timestamp, not by transaction date. The input slice
/// is left untouched.
pub fn recent_transactions(transactions: &[Transaction], count: usize) -> Vec<Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.into_iter().take(count).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::{at, date, expense, income};

    #[test]
    fn test_newest_first_by_creation_time() {
        let mut old = expense(1.0, date(2025, 3, 30), "1");
        old.created_at = at(10);
        let mut newest = income(2.0, date(2024, 1, 1), "10");
        newest.created_at = at(30);
        let mut middle = expense(3.0, date(2025, 1, 1), "2");
        middle.created_at = at(20);

        let transactions = vec![old.clone(), newest.clone(), middle.clone()];
        let recent = recent_transactions(&transactions, 5);

        assert_eq!(recent, vec![newest, middle, old.clone()]);
        assert_eq!(transactions[0], old);
    }

    #[test]
    fn test_truncates_to_count() {
        let transactions: Vec<_> = (0..8)
            .map(|i| {
                let mut t = expense(1.0, date(2025, 1, 1), "1");
                t.created_at = at(i);
                t
            })
            .collect();

        let recent = recent_transactions(&transactions, DEFAULT_RECENT_COUNT);
        assert_eq!(recent.len(), DEFAULT_RECENT_COUNT);
        assert_eq!(recent[0].created_at, at(7));
        assert!(recent_transactions(&transactions, 0).is_empty());
    }
}
