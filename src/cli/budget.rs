//! Budget CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::analytics::budget_comparisons;
use crate::config::Settings;
use crate::display::{format_budget_comparisons, DisplayOptions};
use crate::error::SpendlensResult;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::parse_month;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the budget for an expense category (replaces any existing one
    /// for the same month)
    Set {
        /// Category name or ID
        category: String,
        /// Budgeted amount
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List budgets for a month against actual spending
    List {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Delete a budget
    Delete {
        /// Budget ID, or category name or ID
        target: String,
        /// Month, when deleting by category (YYYY-MM, defaults to the
        /// current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: BudgetCommands,
) -> SpendlensResult<()> {
    let service = BudgetService::new(storage);
    let opts = DisplayOptions::from(settings);

    match cmd {
        BudgetCommands::Set {
            category,
            amount,
            month,
        } => {
            let month = parse_month(month.as_deref(), today)?;
            let outcome = service.set(&category, amount, month)?;

            match outcome.replaced {
                Some(old) => println!(
                    "Budget for {} updated: {} -> {}",
                    month.label(),
                    opts.money(old.amount),
                    opts.money(outcome.budget.amount)
                ),
                None => println!(
                    "Budget for {} set: {}",
                    month.label(),
                    opts.money(outcome.budget.amount)
                ),
            }
        }

        BudgetCommands::List { month } => {
            let month = parse_month(month.as_deref(), today)?;
            let snapshot = storage.snapshot()?;
            let rows = budget_comparisons(
                &snapshot.transactions,
                &snapshot.categories,
                &snapshot.budgets,
                month,
            );
            print!("{}", format_budget_comparisons(&rows, month, &opts));
        }

        BudgetCommands::Delete { target, month } => {
            let month = parse_month(month.as_deref(), today)?;
            let budget = service.delete(&target, month)?;
            println!(
                "Deleted budget of {} for {}",
                opts.money(budget.amount),
                budget.month.label()
            );
        }
    }

    Ok(())
}
