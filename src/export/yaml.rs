//! YAML Export functionality
//!
//! Exports a group report to YAML for human-readable archiving.

use std::io::Write;

use crate::error::{SplitlyError, SplitlyResult};
use crate::export::json::GroupExport;
use crate::models::Group;
use crate::storage::Storage;

/// Export a group report to YAML
pub fn export_group_yaml<W: Write>(
    storage: &Storage,
    group: &Group,
    writer: &mut W,
) -> SplitlyResult<()> {
    let export = GroupExport::from_storage(storage, group)?;

    writeln!(writer, "# Splitly group report: {}", export.report.group_name)
        .map_err(|e| SplitlyError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| SplitlyError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| SplitlyError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SplitlyError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SplitlyError::Export(e.to_string()))?;

    Ok(())
}
