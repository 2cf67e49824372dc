//! Category service
//!
//! Lookup, creation and deletion of categories. Deleting a category leaves
//! its transactions and budgets in place; they are reported under
//! "Unknown" afterwards.

use tracing::info;

use crate::error::{SpendlensError, SpendlensResult};
use crate::models::{Category, Kind, NEUTRAL_COLOR};
use crate::storage::Storage;

use super::resolve_by_id;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new category
#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    pub name: String,
    pub kind: Kind,
    pub color: Option<String>,
    pub icon: Option<String>,
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(&self, input: CreateCategoryInput) -> SpendlensResult<Category> {
        let name = input.name.trim();

        if self.storage.categories.find_by_name(name)?.is_some() {
            return Err(SpendlensError::Validation(format!(
                "A category named '{}' already exists",
                name
            )));
        }

        let color = input.color.unwrap_or_else(|| NEUTRAL_COLOR.to_string());
        if !is_hex_color(&color) {
            return Err(SpendlensError::Validation(format!(
                "Color must look like #rrggbb, got '{}'",
                color
            )));
        }

        let category = Category::new(name, input.kind, color, input.icon.unwrap_or_default());
        category
            .validate()
            .map_err(|e| SpendlensError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        info!(id = %category.id, name = %category.name, "Created category");

        Ok(category)
    }

    /// Find a category by ID, name (case-insensitive) or unique ID prefix
    pub fn find(&self, identifier: &str) -> SpendlensResult<Option<Category>> {
        let all = self.storage.categories.get_all()?;

        if let Some(category) = all.iter().find(|c| c.id.as_str() == identifier.trim()) {
            return Ok(Some(category.clone()));
        }

        if let Some(category) = self.storage.categories.find_by_name(identifier)? {
            return Ok(Some(category));
        }

        resolve_by_id(all, identifier, "Category", |c| c.id.as_str())
    }

    /// Like [`find`](Self::find), but a miss is an error
    pub fn get(&self, identifier: &str) -> SpendlensResult<Category> {
        self.find(identifier)?
            .ok_or_else(|| SpendlensError::category_not_found(identifier))
    }

    /// List categories in stored order, optionally only one kind
    pub fn list(&self, kind: Option<Kind>) -> SpendlensResult<Vec<Category>> {
        let mut categories = self.storage.categories.get_all()?;
        if let Some(kind) = kind {
            categories.retain(|c| c.kind == kind);
        }
        Ok(categories)
    }

    /// Delete a category
    pub fn delete(&self, identifier: &str) -> SpendlensResult<Category> {
        let category = self.get(identifier)?;

        self.storage.categories.delete(&category.id)?;
        self.storage.categories.save()?;

        info!(id = %category.id, name = %category.name, "Deleted category");

        Ok(category)
    }
}
