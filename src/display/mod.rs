//! Display formatting for terminal output
//!
//! Tables, bar listings and text blocks for records and for every derived
//! view the analytics engine produces.

pub mod category;
pub mod format;
pub mod report;
pub mod transaction;

pub use category::format_category_list;
pub use format::DisplayOptions;
pub use report::{
    format_budget_comparisons, format_category_expenses, format_dashboard, format_insights,
    format_monthly_expenses, format_totals,
};
pub use transaction::{format_transaction_details, format_transaction_table};
