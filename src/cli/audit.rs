//! Audit log CLI command

use clap::Args;

use crate::error::SplitlyResult;
use crate::storage::Storage;

/// Arguments for `splitly audit`
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Number of most recent entries to show
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,
}

/// Print recent audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, args: AuditArgs) -> SplitlyResult<()> {
    let entries = storage.audit().read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
