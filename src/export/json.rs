//! JSON export of the dashboard
//!
//! Writes every derived view, wrapped with schema and version information.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::analytics::Dashboard;
use crate::error::{SpendlensError, SpendlensResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Dashboard export structure
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    pub dashboard: &'a Dashboard,
}

impl<'a> DashboardExport<'a> {
    pub fn new(dashboard: &'a Dashboard) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            dashboard,
        }
    }
}

/// Export the dashboard as pretty-printed JSON
pub fn export_dashboard_json<W: Write>(dashboard: &Dashboard, writer: &mut W) -> SpendlensResult<()> {
    let export = DashboardExport::new(dashboard);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| SpendlensError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SpendlensError::Export(e.to_string()))?;

    Ok(())
}
