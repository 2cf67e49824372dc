//! Transaction display formatting

use std::collections::HashMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, CategoryId, Kind, Transaction, UNKNOWN_CATEGORY_NAME};

use super::format::{truncate, DisplayOptions};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn category_names(categories: &[Category]) -> HashMap<&CategoryId, &str> {
    categories.iter().map(|c| (&c.id, c.name.as_str())).collect()
}

/// Format a list of transactions as a table
pub fn format_transaction_table(
    transactions: &[Transaction],
    categories: &[Category],
    opts: &DisplayOptions,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let names = category_names(categories);
    let rows = transactions.iter().map(|txn| {
        let signed = match txn.kind {
            Kind::Income => txn.amount,
            Kind::Expense => -txn.amount,
        };
        TransactionRow {
            id: txn.id.short().to_string(),
            date: opts.date(txn.date),
            kind: txn.kind.to_string(),
            category: names
                .get(&txn.category)
                .copied()
                .unwrap_or(UNKNOWN_CATEGORY_NAME)
                .to_string(),
            description: truncate(&txn.description, 32),
            amount: opts.money(signed),
        }
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    category: Option<&Category>,
    opts: &DisplayOptions,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", opts.date(txn.date)));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", opts.money(txn.amount)));
    output.push_str(&format!(
        "Category:    {}\n",
        category.map_or(UNKNOWN_CATEGORY_NAME, |c| c.name.as_str())
    ));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Recorded:    {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
