//! CLI commands for reports
//!
//! Every report is computed from one snapshot of the store and one sampled
//! "today".

use chrono::NaiveDate;
use clap::Subcommand;

use crate::analytics::{
    budget_comparisons, category_expenses, financial_insights, monthly_expenses, Dashboard, Totals,
};
use crate::config::Settings;
use crate::display::{
    format_budget_comparisons, format_category_expenses, format_dashboard, format_insights,
    format_monthly_expenses, format_totals, DisplayOptions,
};
use crate::error::SpendlensResult;
use crate::storage::Storage;

use super::parse_month;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Expenses per month (most recent twelve months)
    Monthly,

    /// Expenses per category, largest first
    #[command(alias = "spending")]
    Categories,

    /// Income, expenses and balance for this month and all time
    Totals,

    /// Budgets against actual spending
    Budgets {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Observations about your spending
    Insights,

    /// Everything at once
    Dashboard,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: ReportCommands,
) -> SpendlensResult<()> {
    let snapshot = storage.snapshot()?;
    let ctx = snapshot.context(today);
    let opts = DisplayOptions::from(settings);

    let output = match cmd {
        ReportCommands::Monthly => format_monthly_expenses(&monthly_expenses(ctx.transactions), &opts),
        ReportCommands::Categories => format_category_expenses(
            &category_expenses(ctx.transactions, ctx.categories),
            &opts,
        ),
        ReportCommands::Totals => format_totals(
            &Totals::compute(ctx.transactions, ctx.today),
            ctx.current_month(),
            &opts,
        ),
        ReportCommands::Budgets { month } => {
            let month = parse_month(month.as_deref(), today)?;
            let rows = budget_comparisons(ctx.transactions, ctx.categories, ctx.budgets, month);
            format_budget_comparisons(&rows, month, &opts)
        }
        ReportCommands::Insights => format_insights(&financial_insights(&ctx), &opts),
        ReportCommands::Dashboard => {
            let dashboard = Dashboard::build(&ctx, settings.recent_count);
            format_dashboard(&dashboard, ctx.categories, &opts)
        }
    };

    print!("{}", output);
    Ok(())
}
