//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json. When the file
//! does not exist yet, the default category set is loaded and written out.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::{debug, info};

use crate::error::SpendlensError;
use crate::models::{default_categories, Category, CategoryId};

use super::file_io::{read_json_optional, write_json_atomic};

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<Vec<Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(Vec::new()),
        }
    }

    /// Load categories from disk, seeding the defaults on first use
    pub fn load(&self) -> Result<(), SpendlensError> {
        let loaded = match read_json_optional::<Vec<Category>, _>(&self.path)? {
            Some(categories) => {
                debug!(count = categories.len(), "Loaded categories");
                categories
            }
            None => {
                let defaults = default_categories();
                info!(
                    count = defaults.len(),
                    path = %self.path.display(),
                    "No categories file found, writing defaults"
                );
                write_json_atomic(&self.path, &defaults)?;
                defaults
            }
        };

        let mut categories = self
            .categories
            .write()
            .map_err(|e| SpendlensError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *categories = loaded;

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), SpendlensError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| SpendlensError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, categories.as_slice())
    }

    /// Get a category by ID
    pub fn get(&self, id: &CategoryId) -> Result<Option<Category>, SpendlensError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| SpendlensError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.iter().find(|c| &c.id == id).cloned())
    }

    /// Get all categories in stored order
    pub fn get_all(&self) -> Result<Vec<Category>, SpendlensError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| SpendlensError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.clone())
    }

    /// Get a category by name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Result<Option<Category>, SpendlensError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| SpendlensError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.trim().to_lowercase();
        Ok(categories
            .iter()
            .find(|c| c.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Insert or update a category
    pub fn upsert(&self, category: Category) -> Result<(), SpendlensError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| SpendlensError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category,
            None => categories.push(category),
        }
        Ok(())
    }

    /// Delete a category
    ///
    /// Transactions pointing at it are left alone; the summaries show them
    /// under "Unknown".
    pub fn delete(&self, id: &CategoryId) -> Result<bool, SpendlensError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| SpendlensError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = categories.len();
        categories.retain(|c| &c.id != id);
        Ok(categories.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Kind;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        let repo = CategoryRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_first_load_seeds_defaults() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 13);
        assert!(temp_dir.path().join("categories.json").exists());
    }

    #[test]
    fn test_existing_file_is_not_reseeded() {
        let (temp_dir, repo) = create_test_repo();
        let custom = vec![Category::with_id("x", "Pets", Kind::Expense, "#111111", "🐶")];
        write_json_atomic(temp_dir.path().join("categories.json"), &custom).unwrap();

        repo.load().unwrap();
        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Pets");
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let found = repo.find_by_name("food & dining").unwrap().unwrap();
        assert_eq!(found.id.as_str(), "1");
        assert!(repo.find_by_name("Nope").unwrap().is_none());
    }

    #[test]
    fn test_upsert_and_delete() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut pets = Category::new("Pets", Kind::Expense, "#111111", "🐶");
        repo.upsert(pets.clone()).unwrap();
        assert_eq!(repo.get_all().unwrap().len(), 14);

        pets.name = "Pet Care".to_string();
        repo.upsert(pets.clone()).unwrap();
        assert_eq!(repo.get_all().unwrap().len(), 14);
        assert_eq!(repo.get(&pets.id).unwrap().unwrap().name, "Pet Care");

        assert!(repo.delete(&pets.id).unwrap());
        repo.save().unwrap();

        let repo2 = CategoryRepository::new(temp_dir.path().join("categories.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get_all().unwrap().len(), 13);
    }
}
