//! Transaction CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::analytics::recent_transactions;
use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_table, DisplayOptions};
use crate::error::SpendlensResult;
use crate::models::Kind;
use crate::services::{
    CategoryService, CreateTransactionInput, TransactionFilter, TransactionService,
    UpdateTransactionInput,
};
use crate::storage::Storage;

use super::{parse_date, parse_month};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// income or expense
        kind: Kind,
        /// Amount (positive)
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// What it was for
        description: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions, most recently added first
    List {
        /// Only income or only expenses
        #[arg(short, long)]
        kind: Option<Kind>,
        /// Only this category (name or ID)
        #[arg(short, long)]
        category: Option<String>,
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show the most recently recorded transactions
    Recent {
        /// How many to show (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Show transaction details
    Show {
        /// Transaction ID or ID prefix
        id: String,
    },

    /// Edit a transaction
    Edit {
        /// Transaction ID or ID prefix
        id: String,
        #[arg(short, long)]
        kind: Option<Kind>,
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<f64>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID or ID prefix
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: TransactionCommands,
) -> SpendlensResult<()> {
    let service = TransactionService::new(storage);
    let opts = DisplayOptions::from(settings);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            description,
            category,
            date,
        } => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => today,
            };

            let txn = service.create(CreateTransactionInput {
                kind,
                amount,
                date,
                category,
                description,
            })?;

            println!(
                "Recorded {} of {} on {} [{}]",
                txn.kind.as_str(),
                opts.money(txn.amount),
                opts.date(txn.date),
                txn.id.short()
            );
        }

        TransactionCommands::List {
            kind,
            category,
            month,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(kind) = kind {
                filter = filter.kind(kind);
            }
            if let Some(category) = category {
                let category = CategoryService::new(storage).get(&category)?;
                filter = filter.category(category.id);
            }
            if month.is_some() {
                filter = filter.month(parse_month(month.as_deref(), today)?);
            }

            let transactions = service.list(filter)?;
            let categories = storage.categories.get_all()?;
            print!("{}", format_transaction_table(&transactions, &categories, &opts));
        }

        TransactionCommands::Recent { count } => {
            let count = count.unwrap_or(settings.recent_count);
            let transactions = storage.transactions.get_all()?;
            let categories = storage.categories.get_all()?;
            let recent = recent_transactions(&transactions, count);
            print!("{}", format_transaction_table(&recent, &categories, &opts));
        }

        TransactionCommands::Show { id } => {
            let txn = service.get(&id)?;
            let category = storage.categories.get(&txn.category)?;
            print!("{}", format_transaction_details(&txn, category.as_ref(), &opts));
        }

        TransactionCommands::Edit {
            id,
            kind,
            amount,
            date,
            category,
            description,
        } => {
            let date = date.as_deref().map(parse_date).transpose()?;
            let input = UpdateTransactionInput {
                kind,
                amount,
                date,
                category,
                description,
            };

            if input.is_empty() {
                println!("Nothing to change.");
                return Ok(());
            }

            let txn = service.update(&id, input)?;
            println!("Updated transaction {}", txn.id.short());
        }

        TransactionCommands::Delete { id } => {
            let txn = service.delete(&id)?;
            println!(
                "Deleted {} of {} ({})",
                txn.kind.as_str(),
                opts.money(txn.amount),
                txn.description
            );
        }
    }

    Ok(())
}
