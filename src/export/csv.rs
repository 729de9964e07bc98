//! CSV Export functionality
//!
//! Exports a group's expenses and recorded settlements to CSV.

use std::io::Write;

use crate::display::{member_names, name_for};
use crate::error::{SplitlyError, SplitlyResult};
use crate::models::Group;
use crate::services::{ExpenseService, GroupService, SettlementService};
use crate::storage::Storage;

/// Export a group's expenses to CSV, newest first
pub fn export_expenses_csv<W: Write>(
    storage: &Storage,
    group: &Group,
    writer: W,
) -> SplitlyResult<()> {
    let names = member_names(&GroupService::new(storage).members(group)?);
    let expenses = ExpenseService::new(storage).list(group)?;

    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(["ID", "Date", "Description", "Paid By", "Amount", "Split Between"])
        .map_err(|e| SplitlyError::Export(e.to_string()))?;

    for expense in &expenses {
        let mut split: Vec<&str> = expense
            .split_members
            .iter()
            .map(|m| name_for(&names, *m))
            .collect();
        split.sort_by_key(|n| n.to_lowercase());

        wtr.write_record([
            expense.id.as_uuid().to_string(),
            expense.date.to_rfc3339(),
            expense.description.clone(),
            name_for(&names, expense.paid_by).to_string(),
            format!("{:.2}", expense.amount.value()),
            split.join("; "),
        ])
        .map_err(|e| SplitlyError::Export(e.to_string()))?;
    }

    wtr.flush().map_err(|e| SplitlyError::Export(e.to_string()))?;
    Ok(())
}

/// Export a group's recorded settlements to CSV, newest first
pub fn export_settlements_csv<W: Write>(
    storage: &Storage,
    group: &Group,
    writer: W,
) -> SplitlyResult<()> {
    let names = member_names(&GroupService::new(storage).members(group)?);
    let settlements = SettlementService::new(storage).list(group)?;

    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(["ID", "Date", "From", "To", "Amount"])
        .map_err(|e| SplitlyError::Export(e.to_string()))?;

    for s in &settlements {
        wtr.write_record([
            s.id.as_uuid().to_string(),
            s.date.to_rfc3339(),
            name_for(&names, s.from_member).to_string(),
            name_for(&names, s.to_member).to_string(),
            format!("{:.2}", s.amount.value()),
        ])
        .map_err(|e| SplitlyError::Export(e.to_string()))?;
    }

    wtr.flush().map_err(|e| SplitlyError::Export(e.to_string()))?;
    Ok(())
}
