//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod expense;
pub mod group;
pub mod member;
pub mod report;
pub mod settle;

pub use audit::{handle_audit_command, AuditArgs};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use group::{handle_group_command, GroupCommands};
pub use member::{handle_member_command, MemberCommands};
pub use report::{handle_report_command, ReportArgs, ReportFormat};
pub use settle::{handle_settle_command, SettleCommands};

use crate::config::settings::Settings;
use crate::error::{SplitlyError, SplitlyResult};
use crate::models::Member;
use crate::services::MemberService;
use crate::storage::Storage;

/// Resolve the member a command acts as
///
/// An explicit name or ID wins; otherwise the active member from settings.
pub fn resolve_actor(
    storage: &Storage,
    settings: &Settings,
    explicit: Option<&str>,
) -> SplitlyResult<Member> {
    let service = MemberService::new(storage);

    if let Some(identifier) = explicit {
        return service.require(identifier);
    }

    let id = settings.active_member.ok_or_else(|| {
        SplitlyError::Config(
            "No active member. Pass --as <member> or run 'splitly member use <member>'".into(),
        )
    })?;

    service
        .get(id)?
        .ok_or_else(|| SplitlyError::member_not_found(id.to_string()))
}
