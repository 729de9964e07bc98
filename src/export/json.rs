//! JSON Export functionality
//!
//! Exports a group report to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{SplitlyError, SplitlyResult};
use crate::models::Group;
use crate::reports::GroupReport;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Versioned wrapper around a group report
#[derive(Debug, Clone, Serialize)]
pub struct GroupExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The report itself
    pub report: GroupReport,
}

impl GroupExport {
    /// Build an export for a group
    pub fn from_storage(storage: &Storage, group: &Group) -> SplitlyResult<Self> {
        Ok(Self::from_report(GroupReport::generate(storage, group)?))
    }

    /// Wrap an already generated report
    pub fn from_report(report: GroupReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            report,
        }
    }
}

/// Export a group report as pretty-printed JSON
pub fn export_group_json<W: Write>(
    storage: &Storage,
    group: &Group,
    writer: &mut W,
) -> SplitlyResult<()> {
    let export = GroupExport::from_storage(storage, group)?;

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| SplitlyError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SplitlyError::Export(e.to_string()))?;

    Ok(())
}
