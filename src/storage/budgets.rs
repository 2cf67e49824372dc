//! Budget repository for JSON storage
//!
//! Manages loading and saving budgets to budgets.json. Adding a budget
//! replaces any existing one for the same category and month.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::SpendlensError;
use crate::models::{Budget, BudgetId, CategoryId, YearMonth};

use super::file_io::{read_json, write_json_atomic};

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(Vec::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), SpendlensError> {
        let loaded: Vec<Budget> = read_json(&self.path)?;
        debug!(count = loaded.len(), "Loaded budgets");

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| SpendlensError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *budgets = loaded;

        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), SpendlensError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| SpendlensError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, budgets.as_slice())
    }

    /// Get a budget by ID
    pub fn get(&self, id: &BudgetId) -> Result<Option<Budget>, SpendlensError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| SpendlensError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.iter().find(|b| &b.id == id).cloned())
    }

    /// Get all budgets in stored order
    pub fn get_all(&self) -> Result<Vec<Budget>, SpendlensError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| SpendlensError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.clone())
    }

    /// Find the budget for a category in a month
    pub fn find(
        &self,
        category_id: &CategoryId,
        month: YearMonth,
    ) -> Result<Option<Budget>, SpendlensError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| SpendlensError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.iter().find(|b| b.is_for(category_id, month)).cloned())
    }

    /// Add a budget, replacing any existing budget for the same
    /// category and month
    ///
    /// Returns the replaced budget, if there was one.
    pub fn add(&self, budget: Budget) -> Result<Option<Budget>, SpendlensError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| SpendlensError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let replaced = budgets
            .iter()
            .position(|b| b.is_for(&budget.category_id, budget.month))
            .map(|idx| budgets.remove(idx));

        budgets.push(budget);
        Ok(replaced)
    }

    /// Replace an existing budget by ID
    pub fn update(&self, budget: Budget) -> Result<bool, SpendlensError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| SpendlensError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match budgets.iter_mut().find(|b| b.id == budget.id) {
            Some(slot) => {
                *slot = budget;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete a budget
    pub fn delete(&self, id: &BudgetId) -> Result<bool, SpendlensError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| SpendlensError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = budgets.len();
        budgets.retain(|b| &b.id != id);
        Ok(budgets.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");
        let repo = BudgetRepository::new(path);
        (temp_dir, repo)
    }

    fn month(s: &str) -> YearMonth {
        YearMonth::parse(s).unwrap()
    }

    #[test]
    fn test_add_replaces_same_category_and_month() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let first = Budget::new("1", 300.0, month("2025-01"));
        assert!(repo.add(first.clone()).unwrap().is_none());

        let other_month = Budget::new("1", 250.0, month("2025-02"));
        repo.add(other_month).unwrap();

        let replacement = Budget::new("1", 400.0, month("2025-01"));
        let replaced = repo.add(replacement.clone()).unwrap().unwrap();
        assert_eq!(replaced.id, first.id);

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);

        let found = repo
            .find(&CategoryId::from("1"), month("2025-01"))
            .unwrap()
            .unwrap();
        assert_eq!(found.id, replacement.id);
        assert_eq!(found.amount, 400.0);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let budget = Budget::new("5", 120.0, month("2025-03"));
        repo.add(budget.clone()).unwrap();
        repo.save().unwrap();

        let repo2 = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(&budget.id).unwrap(), Some(budget));
    }

    #[test]
    fn test_update_and_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut budget = Budget::new("2", 80.0, month("2025-01"));
        repo.add(budget.clone()).unwrap();

        budget.amount = 90.0;
        assert!(repo.update(budget.clone()).unwrap());
        assert_eq!(repo.get(&budget.id).unwrap().unwrap().amount, 90.0);

        assert!(repo.delete(&budget.id).unwrap());
        assert!(repo.get_all().unwrap().is_empty());
    }
}
