//! Net balance calculation
//!
//! Every expense credits its payer with the full amount and debits each split
//! member with an equal share, so each expense nets to zero across the group.
//! Every recorded settlement moves value from the receiver back to the payer.
//! The result does not depend on record order.

use crate::error::SplitlyResult;

use super::records::{BalanceMap, ExpenseRecord, SettlementRecord};

/// Compute each member's net balance from a group's ledger
///
/// Members that appear in no record are absent from the result.
///
/// # Errors
///
/// Returns `InvalidExpense` for an expense with an empty split or a
/// non-positive amount, and `InvalidSettlement` for a settlement with a
/// non-positive amount. A settlement from a member to themselves nets to
/// zero.
pub fn compute_balances(
    expenses: &[ExpenseRecord],
    settlements: &[SettlementRecord],
) -> SplitlyResult<BalanceMap> {
    let mut balances = BalanceMap::new();

    for expense in expenses {
        let share = expense.share()?;

        balances.credit(expense.paid_by, expense.amount);
        for &member in &expense.split_members {
            balances.debit(member, share);
        }
    }

    for settlement in settlements {
        settlement.validate()?;

        balances.credit(settlement.from_member, settlement.amount);
        balances.debit(settlement.to_member, settlement.amount);
    }

    Ok(balances)
}
