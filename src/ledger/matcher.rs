//! Greedy settle-up matching
//!
//! Pairs the largest remaining creditor with the largest remaining debtor
//! until one side is exhausted. This is not globally minimal in every case,
//! but it never needs more than `creditors + debtors - 1` transfers.

use crate::error::{SplitlyError, SplitlyResult};
use crate::models::{Amount, MemberId, SETTLED_TOLERANCE};

use super::records::{BalanceMap, SuggestedSettlement};

/// Propose transfers that bring every balance to zero
///
/// Members within the settled tolerance of zero take no part. Creditors and
/// debtors are each ordered by descending amount; equal amounts keep
/// ascending member ID order.
///
/// # Errors
///
/// Returns `InvalidBalance` if any balance is NaN or infinite.
pub fn compute_settlements(balances: &BalanceMap) -> SplitlyResult<Vec<SuggestedSettlement>> {
    if let Some((member, amount)) = balances.iter().find(|(_, amount)| !amount.is_finite()) {
        return Err(SplitlyError::InvalidBalance {
            member: member.to_string(),
            value: amount.value(),
        });
    }

    let creditors = sorted_descending(
        balances
            .iter()
            .filter(|(_, amount)| amount.value() > SETTLED_TOLERANCE),
    );
    let debtors = sorted_descending(
        balances
            .iter()
            .filter(|(_, amount)| amount.value() < -SETTLED_TOLERANCE)
            .map(|(member, amount)| (member, amount.abs())),
    );

    let mut credit_left: Vec<Amount> = creditors.iter().map(|(_, amount)| *amount).collect();
    let mut debt_left: Vec<Amount> = debtors.iter().map(|(_, amount)| *amount).collect();

    let mut transfers = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < creditors.len() && j < debtors.len() {
        let settle = credit_left[i].min(debt_left[j]);

        if settle.value() > SETTLED_TOLERANCE {
            transfers.push(SuggestedSettlement {
                from_member: debtors[j].0,
                to_member: creditors[i].0,
                amount: settle.round_cents(),
            });
        }

        credit_left[i] -= settle;
        debt_left[j] -= settle;

        if credit_left[i].value() < SETTLED_TOLERANCE {
            i += 1;
        }
        if debt_left[j].value() < SETTLED_TOLERANCE {
            j += 1;
        }
    }

    Ok(transfers)
}

fn sorted_descending(
    entries: impl Iterator<Item = (MemberId, Amount)>,
) -> Vec<(MemberId, Amount)> {
    let mut entries: Vec<_> = entries.collect();
    // sort_by is stable: ties stay in member ID order
    entries.sort_by(|a, b| b.1.value().total_cmp(&a.1.value()));
    entries
}
