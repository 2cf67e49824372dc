//! Service layer for spendlens
//!
//! The service layer sits on top of the storage layer and does the input
//! validation and record lookup the command line needs before anything is
//! written.

pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::{BudgetService, SetBudgetOutcome};
pub use category::{CategoryService, CreateCategoryInput};
pub use transaction::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};

use crate::error::{SpendlensError, SpendlensResult};

/// Resolve an identifier against a set of records by exact id, then by
/// unique id prefix
///
/// A prefix matching more than one record is rejected rather than guessed.
pub(crate) fn resolve_by_id<T>(
    mut items: Vec<T>,
    identifier: &str,
    entity_type: &'static str,
    id_of: impl Fn(&T) -> &str,
) -> SpendlensResult<Option<T>> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Ok(None);
    }

    if let Some(pos) = items.iter().position(|item| id_of(item) == identifier) {
        return Ok(Some(items.swap_remove(pos)));
    }

    let mut matches: Vec<T> = items
        .into_iter()
        .filter(|item| id_of(item).starts_with(identifier))
        .collect();

    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop()),
        n => Err(SpendlensError::Validation(format!(
            "{} id prefix '{}' is ambiguous ({} matches)",
            entity_type, identifier, n
        ))),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_wins_over_prefix() {
        let items = ids(&["1", "10", "11"]);
        let found = resolve_by_id(items, "1", "Category", |s| s.as_str()).unwrap();
        assert_eq!(found.as_deref(), Some("1"));
    }

    #[test]
    fn test_unique_prefix() {
        let items = ids(&["abc123", "def456"]);
        let found = resolve_by_id(items, "de", "Transaction", |s| s.as_str()).unwrap();
        assert_eq!(found.as_deref(), Some("def456"));
    }

    #[test]
    fn test_ambiguous_prefix_is_rejected() {
        let items = ids(&["abc123", "abd456"]);
        let err = resolve_by_id(items, "ab", "Transaction", |s| s.as_str()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_no_match_or_blank() {
        let items = ids(&["abc123"]);
        assert!(resolve_by_id(items.clone(), "zz", "Budget", |s| s.as_str())
            .unwrap()
            .is_none());
        assert!(resolve_by_id(items, "  ", "Budget", |s| s.as_str())
            .unwrap()
            .is_none());
    }
}
