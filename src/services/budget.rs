//! Budget service
//!
//! Monthly per-category spending limits. Setting a budget for a
//! (category, month) that already has one replaces it.

use tracing::info;

use crate::error::{SpendlensError, SpendlensResult};
use crate::models::{Budget, Kind, YearMonth};
use crate::storage::Storage;

use super::{resolve_by_id, CategoryService};

/// Shortest budget id prefix accepted by [`BudgetService::delete`]
pub const MIN_ID_PREFIX_LEN: usize = 8;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

/// Result of setting a budget
#[derive(Debug, Clone)]
pub struct SetBudgetOutcome {
    pub budget: Budget,
    /// The budget this one replaced, if any
    pub replaced: Option<Budget>,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the budget for an expense category in a month
    pub fn set(
        &self,
        category: &str,
        amount: f64,
        month: YearMonth,
    ) -> SpendlensResult<SetBudgetOutcome> {
        let category = CategoryService::new(self.storage).get(category)?;
        if category.kind != Kind::Expense {
            return Err(SpendlensError::Validation(format!(
                "Budgets can only be set on expense categories; '{}' is income",
                category.name
            )));
        }

        let budget = Budget::new(category.id.clone(), amount, month);
        budget
            .validate()
            .map_err(|e| SpendlensError::Validation(e.to_string()))?;

        let replaced = self.storage.budgets.add(budget.clone())?;
        self.storage.budgets.save()?;

        info!(
            category = %category.name,
            month = %month,
            amount,
            replaced = replaced.is_some(),
            "Set budget"
        );

        Ok(SetBudgetOutcome { budget, replaced })
    }

    /// Find a budget by ID or unique ID prefix
    pub fn find(&self, identifier: &str) -> SpendlensResult<Option<Budget>> {
        let all = self.storage.budgets.get_all()?;
        resolve_by_id(all, identifier, "Budget", |b| b.id.as_str())
    }

    /// List budgets in stored order, optionally only one month
    pub fn list(&self, month: Option<YearMonth>) -> SpendlensResult<Vec<Budget>> {
        let mut budgets = self.storage.budgets.get_all()?;
        if let Some(month) = month {
            budgets.retain(|b| b.month == month);
        }
        Ok(budgets)
    }

    /// Delete a budget by ID, or by category for the given month
    ///
    /// A category match wins over a budget id prefix: default category ids
    /// ("1".."13") are also valid prefixes of generated ids. Budget ids are
    /// matched exactly, or by a prefix of at least [`MIN_ID_PREFIX_LEN`]
    /// characters.
    pub fn delete(&self, identifier: &str, month: YearMonth) -> SpendlensResult<Budget> {
        let identifier = identifier.trim();
        let all = self.storage.budgets.get_all()?;

        let budget = if let Some(budget) = all.iter().find(|b| b.id.as_str() == identifier) {
            budget.clone()
        } else if let Some(category) = CategoryService::new(self.storage).find(identifier)? {
            self.storage
                .budgets
                .find(&category.id, month)?
                .ok_or_else(|| {
                    SpendlensError::budget_not_found(format!("{} in {}", category.name, month))
                })?
        } else if identifier.chars().count() >= MIN_ID_PREFIX_LEN {
            resolve_by_id(all, identifier, "Budget", |b| b.id.as_str())?
                .ok_or_else(|| SpendlensError::budget_not_found(identifier))?
        } else {
            return Err(SpendlensError::budget_not_found(identifier));
        };

        self.storage.budgets.delete(&budget.id)?;
        self.storage.budgets.save()?;

        info!(id = %budget.id.short(), "Deleted budget");

        Ok(budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetId;
    use crate::services::test_support::create_test_storage;

    fn march() -> YearMonth {
        YearMonth::new(2025, 3).unwrap()
    }

    #[test]
    fn test_set_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let outcome = service.set("Food & Dining", 300.0, march()).unwrap();
        assert_eq!(outcome.budget.category_id.as_str(), "1");
        assert!(outcome.replaced.is_none());
        assert_eq!(service.list(Some(march())).unwrap().len(), 1);
    }

    #[test]
    fn test_set_replaces_same_category_and_month() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let first = service.set("1", 300.0, march()).unwrap();
        service.set("1", 200.0, march().prev()).unwrap();
        let second = service.set("1", 450.0, march()).unwrap();

        assert_eq!(second.replaced.unwrap().id, first.budget.id);

        let budgets = service.list(None).unwrap();
        assert_eq!(budgets.len(), 2);
        let current = service.list(Some(march())).unwrap();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].amount, 450.0);
    }

    #[test]
    fn test_set_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        assert!(service.set("1", 0.0, march()).unwrap_err().is_validation());
        assert!(service.set("Salary", 100.0, march()).unwrap_err().is_validation());
        assert!(service.set("missing", 100.0, march()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_by_id_or_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let food = service.set("1", 300.0, march()).unwrap().budget;
        service.set("2", 100.0, march()).unwrap();

        let deleted = service.delete(food.id.short(), march()).unwrap();
        assert_eq!(deleted.id, food.id);

        let deleted = service.delete("Transportation", march()).unwrap();
        assert_eq!(deleted.category_id.as_str(), "2");

        assert!(service.list(None).unwrap().is_empty());
        assert!(service.delete("Transportation", march()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_by_category_id_ignores_budget_id_prefix() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let food = service.set("1", 300.0, march()).unwrap().budget;

        // Two budgets elsewhere whose ids also start with "1"
        let july = YearMonth::new(2024, 7).unwrap();
        for (category, id) in [
            ("2", "1f3a9c22-0000-4000-8000-000000000001"),
            ("3", "1b7e0d41-0000-4000-8000-000000000002"),
        ] {
            let mut other = Budget::new(category, 80.0, july);
            other.id = BudgetId::from_string(id);
            storage.budgets.add(other).unwrap();
        }

        let deleted = service.delete("1", march()).unwrap();
        assert_eq!(deleted.id, food.id);

        let remaining = service.list(None).unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|b| b.month == july));

        // Short prefixes never reach the budget ids
        assert!(service.delete("1f3a", july).unwrap_err().is_not_found());

        let deleted = service.delete("1f3a9c22", july).unwrap();
        assert_eq!(deleted.category_id.as_str(), "2");
        assert_eq!(service.list(None).unwrap().len(), 1);
    }
}
