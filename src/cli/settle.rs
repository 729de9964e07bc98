//! Settle-up CLI commands
//!
//! Shows balances and suggested settlements, and records payments.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{
    format_balance_table, format_settlement_history, format_suggestions, member_names,
};
use crate::error::SplitlyResult;
use crate::services::{BalanceService, GroupService, MemberService, SettlementService};
use crate::storage::Storage;

use super::expense::parse_amount;

/// Settle-up subcommands
#[derive(Subcommand)]
pub enum SettleCommands {
    /// Show each member's balance
    Balances {
        /// Group name, code or ID
        group: String,
    },
    /// Suggest the transfers that settle the group
    Suggest {
        /// Group name, code or ID
        group: String,
    },
    /// Record a payment between two members
    Record {
        /// Group name, code or ID
        group: String,
        /// Member who paid
        #[arg(long)]
        from: String,
        /// Member who received the money
        #[arg(long)]
        to: String,
        /// Amount paid
        amount: String,
    },
    /// List recorded payments
    History {
        /// Group name, code or ID
        group: String,
    },
}

/// Handle a settle command
pub fn handle_settle_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SettleCommands,
) -> SplitlyResult<()> {
    let groups = GroupService::new(storage);
    let balances = BalanceService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        SettleCommands::Balances { group } => {
            let group = groups.require(&group)?;
            let summary = balances.summary(&group)?;
            println!("Balances for {}", group.name);
            println!();
            println!("{}", format_balance_table(&summary, symbol).trim_end());
        }

        SettleCommands::Suggest { group } => {
            let group = groups.require(&group)?;
            let summary = balances.summary(&group)?;
            println!("{}", format_suggestions(&summary, symbol).trim_end());
        }

        SettleCommands::Record {
            group,
            from,
            to,
            amount,
        } => {
            let group = groups.require(&group)?;
            let members = MemberService::new(storage);
            let from = members.require(&from)?;
            let to = members.require(&to)?;
            let amount = parse_amount(&amount)?;

            let settlement =
                SettlementService::new(storage).record(&group, from.id, to.id, amount)?;

            println!(
                "Recorded: {} paid {} {}",
                from.name,
                to.name,
                settlement.amount.format_with_symbol(symbol)
            );
        }

        SettleCommands::History { group } => {
            let group = groups.require(&group)?;
            let names = member_names(&groups.members(&group)?);
            let settlements = SettlementService::new(storage).list(&group)?;
            println!(
                "{}",
                format_settlement_history(&settlements, &names, symbol, &settings.date_format)
                    .trim_end()
            );
        }
    }

    Ok(())
}
