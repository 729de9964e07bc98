//! Expense CLI commands
//!
//! Implements CLI commands for adding, listing and deleting expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_list, member_names};
use crate::error::{SplitlyError, SplitlyResult};
use crate::models::{Amount, MemberId};
use crate::services::{ExpenseService, GroupService, MemberService};
use crate::storage::Storage;

use super::resolve_actor;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add an expense to a group
    Add {
        /// Group name, code or ID
        group: String,
        /// Amount paid (e.g., "90" or "12.50")
        amount: String,
        /// What the money was spent on
        description: String,
        /// Member who paid (defaults to the active member)
        #[arg(short, long)]
        paid_by: Option<String>,
        /// Members sharing the cost, comma separated (defaults to everyone)
        #[arg(short, long, value_delimiter = ',')]
        split: Vec<String>,
    },
    /// List a group's expenses
    List {
        /// Group name, code or ID
        group: String,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        expense: String,
        /// Member deleting the expense (defaults to the active member)
        #[arg(long = "as")]
        as_member: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SplitlyResult<()> {
    let service = ExpenseService::new(storage);
    let groups = GroupService::new(storage);
    let members = MemberService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            group,
            amount,
            description,
            paid_by,
            split,
        } => {
            let group = groups.require(&group)?;
            let amount = parse_amount(&amount)?;
            let payer = resolve_actor(storage, settings, paid_by.as_deref())?;

            let split_ids = split
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(|s| members.require(s).map(|m| m.id))
                .collect::<SplitlyResult<Vec<MemberId>>>()?;

            let expense = service.add(&group, &description, amount, payer.id, &split_ids)?;

            println!("Added expense: {}", expense.description);
            println!(
                "  Amount: {}",
                expense.amount.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Paid by: {}", payer.name);
            println!("  Split {} ways", expense.split_members.len());
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List { group } => {
            let group = groups.require(&group)?;
            let names = member_names(&groups.members(&group)?);
            let expenses = service.list(&group)?;
            println!(
                "{}",
                format_expense_list(
                    &expenses,
                    &names,
                    &settings.currency_symbol,
                    &settings.date_format
                )
                .trim_end()
            );
            if !expenses.is_empty() {
                println!();
                println!(
                    "Total: {}",
                    service
                        .total(&group)?
                        .format_with_symbol(&settings.currency_symbol)
                );
            }
        }

        ExpenseCommands::Delete { expense, as_member } => {
            let actor = resolve_actor(storage, settings, as_member.as_deref())?;
            let found = service.require(&expense)?;
            let deleted = service.delete(found.id, actor.id)?;
            println!("Deleted expense: {} ({})", deleted.description, deleted.id);
        }
    }

    Ok(())
}

/// Parse a user-entered amount
pub(crate) fn parse_amount(input: &str) -> SplitlyResult<Amount> {
    Amount::parse(input).map_err(|e| {
        SplitlyError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '12.50' or '90'. Error: {}",
            input, e
        ))
    })
}
