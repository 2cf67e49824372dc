//! spendlens - local personal finance tracker
//!
//! Records income and expense transactions against categories, keeps
//! monthly per-category budgets, and turns all of it into spending
//! summaries, budget-vs-actual comparisons and rule-based insights.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, budgets)
//! - `storage`: JSON file storage layer
//! - `services`: Validation and lookup on top of storage
//! - `analytics`: The aggregation engine (pure functions)
//! - `display`: Terminal formatting
//! - `export`: JSON / YAML / CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlens::analytics::financial_insights;
//! use spendlens::config::SpendlensPaths;
//! use spendlens::storage::Storage;
//!
//! let mut storage = Storage::new(SpendlensPaths::new()?)?;
//! storage.load_all()?;
//! let snapshot = storage.snapshot()?;
//! let today = chrono::Local::now().date_naive();
//! let insights = financial_insights(&snapshot.context(today));
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{SpendlensError, SpendlensResult};
