//! CSV export of transactions
//!
//! One row per transaction with the category resolved to its name, for
//! spreadsheets.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{SpendlensError, SpendlensResult};
use crate::models::{Category, Transaction, UNKNOWN_CATEGORY_NAME};

const HEADER: [&str; 7] = [
    "ID",
    "Date",
    "Type",
    "Category",
    "Description",
    "Amount",
    "Created At",
];

/// Export transactions to CSV in the given order
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    categories: &[Category],
    writer: W,
) -> SpendlensResult<()> {
    let names: HashMap<_, _> = categories.iter().map(|c| (&c.id, c.name.as_str())).collect();
    let mut out = ::csv::Writer::from_writer(writer);
    let csv_err = |e: ::csv::Error| SpendlensError::Export(e.to_string());

    out.write_record(HEADER).map_err(csv_err)?;

    for txn in transactions {
        let category = names
            .get(&txn.category)
            .copied()
            .unwrap_or(UNKNOWN_CATEGORY_NAME);
        let amount = format!("{:.2}", txn.amount);
        let created = txn.created_at.to_rfc3339();
        let date = txn.date.to_string();

        out.write_record([
            txn.id.as_str(),
            date.as_str(),
            txn.kind.as_str(),
            category,
            txn.description.as_str(),
            amount.as_str(),
            created.as_str(),
        ])
        .map_err(csv_err)?;
    }

    out.flush()
        .map_err(|e| SpendlensError::Export(e.to_string()))?;

    Ok(())
}
