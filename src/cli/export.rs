//! CLI commands for export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};
use tracing::info;

use crate::analytics::Dashboard;
use crate::config::Settings;
use crate::error::SpendlensResult;
use crate::export::{export_dashboard_json, export_dashboard_yaml, export_transactions_csv};
use crate::storage::Storage;

/// Dashboard export format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardFormat {
    #[default]
    Json,
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the dashboard (every derived view)
    Dashboard {
        #[arg(short, long, value_enum, default_value_t = DashboardFormat::Json)]
        format: DashboardFormat,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export all transactions as CSV
    Transactions {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn open_output(output: Option<&PathBuf>) -> SpendlensResult<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout().lock()),
    })
}

/// Handle an export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExportCommands,
) -> SpendlensResult<()> {
    let snapshot = storage.snapshot()?;

    match cmd {
        ExportCommands::Dashboard { format, output } => {
            let dashboard = Dashboard::build(&snapshot.context(today), settings.recent_count);
            let mut writer = open_output(output.as_ref())?;

            match format {
                DashboardFormat::Json => export_dashboard_json(&dashboard, &mut writer)?,
                DashboardFormat::Yaml => export_dashboard_yaml(&dashboard, &mut writer)?,
            }
            writer.flush()?;

            if let Some(path) = output {
                info!(path = %path.display(), "Exported dashboard");
                eprintln!("Dashboard exported to {}", path.display());
            }
        }

        ExportCommands::Transactions { output } => {
            let mut writer = open_output(output.as_ref())?;
            export_transactions_csv(&snapshot.transactions, &snapshot.categories, &mut writer)?;
            writer.flush()?;

            if let Some(path) = output {
                info!(
                    path = %path.display(),
                    count = snapshot.transactions.len(),
                    "Exported transactions"
                );
                eprintln!(
                    "Exported {} transactions to {}",
                    snapshot.transactions.len(),
                    path.display()
                );
            }
        }
    }

    Ok(())
}
