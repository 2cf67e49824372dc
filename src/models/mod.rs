//! Core data models for spendlens
//!
//! The three stored record types (transactions, categories, budgets) plus
//! the small value types they share.

pub mod budget;
pub mod category;
pub mod ids;
pub mod kind;
pub mod month;
pub mod transaction;

pub use budget::Budget;
pub use category::{default_categories, Category, NEUTRAL_COLOR, UNKNOWN_CATEGORY_NAME};
pub use ids::{BudgetId, CategoryId, TransactionId};
pub use kind::Kind;
pub use month::YearMonth;
pub use transaction::Transaction;
