//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer and the
//! analytics engine.

pub mod budget;
pub mod category;
pub mod export;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, DashboardFormat, ExportCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{SpendlensError, SpendlensResult};
use crate::models::YearMonth;

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(s: &str) -> SpendlensResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        SpendlensError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD format.", s))
    })
}

/// Parse an optional `YYYY-MM` month argument, defaulting to the month
/// containing `today`
pub fn parse_month(s: Option<&str>, today: NaiveDate) -> SpendlensResult<YearMonth> {
    match s {
        Some(s) => YearMonth::parse(s.trim()).map_err(|e| {
            SpendlensError::Validation(format!("Invalid month '{}': {}. Use YYYY-MM format.", s, e))
        }),
        None => Ok(YearMonth::of(today)),
    }
}
