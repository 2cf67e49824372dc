//! YAML export of the dashboard
//!
//! Same content as the JSON export, in human-readable form.

use std::io::Write;

use crate::analytics::Dashboard;
use crate::error::{SpendlensError, SpendlensResult};
use crate::export::json::DashboardExport;

/// Export the dashboard to YAML format
pub fn export_dashboard_yaml<W: Write>(dashboard: &Dashboard, writer: &mut W) -> SpendlensResult<()> {
    let export = DashboardExport::new(dashboard);
    let io_err = |e: std::io::Error| SpendlensError::Export(e.to_string());

    // Add a header comment
    writeln!(writer, "# spendlens dashboard export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# For: {}", dashboard.current_month.label()).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SpendlensError::Export(e.to_string()))?;

    Ok(())
}
