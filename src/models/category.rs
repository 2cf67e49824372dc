//! Category model
//!
//! A category names a kind of income or spending. Color and icon are
//! display tokens carried through to the summaries untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::kind::Kind;

/// Display name used when a transaction references a missing category
pub const UNKNOWN_CATEGORY_NAME: &str = "Unknown";

/// Neutral gray used for the Unknown bucket
pub const NEUTRAL_COLOR: &str = "#6b7280";

/// A transaction category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: Kind,

    /// Display color token (e.g. "#ef4444")
    pub color: String,

    /// Display icon token
    #[serde(default)]
    pub icon: String,
}

impl Category {
    /// Create a new category with a generated id
    pub fn new(
        name: impl Into<String>,
        kind: Kind,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: CategoryId::generate(),
            name: name.into(),
            kind,
            color: color.into(),
            icon: icon.into(),
        }
    }

    /// Create a category with a fixed id
    pub fn with_id(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        kind: Kind,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            color: color.into(),
            icon: icon.into(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.chars().count() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.chars().count()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The category set a fresh store starts with
///
/// Nine expense categories followed by four income categories, with the
/// short numeric ids existing data refers to.
pub fn default_categories() -> Vec<Category> {
    const DEFAULTS: [(&str, &str, Kind, &str, &str); 13] = [
        ("1", "Food & Dining", Kind::Expense, "#ef4444", "🍽️"),
        ("2", "Transportation", Kind::Expense, "#f97316", "🚗"),
        ("3", "Shopping", Kind::Expense, "#eab308", "🛍️"),
        ("4", "Entertainment", Kind::Expense, "#22c55e", "🎬"),
        ("5", "Bills & Utilities", Kind::Expense, "#3b82f6", "💡"),
        ("6", "Healthcare", Kind::Expense, "#8b5cf6", "🏥"),
        ("7", "Education", Kind::Expense, "#06b6d4", "📚"),
        ("8", "Travel", Kind::Expense, "#f59e0b", "✈️"),
        ("9", "Other Expenses", Kind::Expense, "#6b7280", "💰"),
        ("10", "Salary", Kind::Income, "#10b981", "💼"),
        ("11", "Freelance", Kind::Income, "#059669", "💻"),
        ("12", "Investments", Kind::Income, "#0d9488", "📈"),
        ("13", "Other Income", Kind::Income, "#14b8a6", "💎"),
    ];

    DEFAULTS
        .iter()
        .map(|(id, name, kind, color, icon)| Category::with_id(*id, *name, *kind, *color, *icon))
        .collect()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let defaults = default_categories();
        assert_eq!(defaults.len(), 13);

        let expenses = defaults.iter().filter(|c| c.kind == Kind::Expense).count();
        let income = defaults.iter().filter(|c| c.kind == Kind::Income).count();
        assert_eq!(expenses, 9);
        assert_eq!(income, 4);

        assert_eq!(defaults[0].id.as_str(), "1");
        assert_eq!(defaults[0].name, "Food & Dining");
        assert_eq!(defaults[12].name, "Other Income");
    }

    #[test]
    fn test_validation() {
        let mut category = Category::new("Pets", Kind::Expense, "#000000", "🐶");
        assert!(category.validate().is_ok());

        category.name = "   ".to_string();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "a".repeat(51);
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::NameTooLong(51))
        ));
    }

    #[test]
    fn test_serialization_uses_type_key() {
        let category = Category::with_id("1", "Food & Dining", Kind::Expense, "#ef4444", "🍽️");
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["id"], "1");

        let back: Category = serde_json::from_value(json).unwrap();
        assert_eq!(back, category);
    }
}
