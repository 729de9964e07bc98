//! Balance service
//!
//! Loads a group's ledger, runs the balance calculator and the settlement
//! matcher, and resolves member names for presentation.

use serde::Serialize;
use tracing::debug;

use crate::error::SplitlyResult;
use crate::ledger::{
    compute_balances, compute_settlements, BalanceMap, ExpenseRecord, SettlementRecord,
};
use crate::models::{Amount, Group, MemberId, SETTLED_TOLERANCE};
use crate::storage::Storage;

use super::member::MemberService;

/// Where a member stands in a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Owed money by the group
    GetsBack,
    /// Owes money to the group
    Owes,
    /// Within a cent of zero
    Settled,
}

impl BalanceStatus {
    /// Classify a net balance
    pub fn of(balance: Amount) -> Self {
        if balance.value() > SETTLED_TOLERANCE {
            Self::GetsBack
        } else if balance.value() < -SETTLED_TOLERANCE {
            Self::Owes
        } else {
            Self::Settled
        }
    }
}

impl std::fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GetsBack => write!(f, "Gets back"),
            Self::Owes => write!(f, "Owes"),
            Self::Settled => write!(f, "Settled"),
        }
    }
}

/// One member's balance row
#[derive(Debug, Clone, Serialize)]
pub struct MemberBalanceRow {
    pub member_id: MemberId,
    pub name: String,
    pub balance: Amount,
    pub status: BalanceStatus,
}

/// A suggested transfer with member names resolved
#[derive(Debug, Clone, Serialize)]
pub struct NamedSettlement {
    pub from_member: MemberId,
    pub from_name: String,
    pub to_member: MemberId,
    pub to_name: String,
    pub amount: Amount,
}

/// Balances and suggested settlements for a group
#[derive(Debug, Clone, Serialize)]
pub struct GroupBalanceSummary {
    pub rows: Vec<MemberBalanceRow>,
    pub suggestions: Vec<NamedSettlement>,
}

impl GroupBalanceSummary {
    /// True when nobody owes anything
    pub fn is_settled(&self) -> bool {
        self.rows.iter().all(|r| r.status == BalanceStatus::Settled)
    }
}

/// Service for group balances
pub struct BalanceService<'a> {
    storage: &'a Storage,
}

impl<'a> BalanceService<'a> {
    /// Create a new balance service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The engine's input records for a group
    pub fn records(
        &self,
        group: &Group,
    ) -> SplitlyResult<(Vec<ExpenseRecord>, Vec<SettlementRecord>)> {
        let expenses = self
            .storage
            .expenses
            .get_by_group(group.id)?
            .iter()
            .map(|e| e.to_record())
            .collect();

        let settlements = self
            .storage
            .settlements
            .get_by_group(group.id)?
            .iter()
            .map(|s| s.to_record())
            .collect();

        Ok((expenses, settlements))
    }

    /// Net balance per member for a group
    pub fn balances(&self, group: &Group) -> SplitlyResult<BalanceMap> {
        let (expenses, settlements) = self.records(group)?;
        debug!(
            group = %group.id,
            expenses = expenses.len(),
            settlements = settlements.len(),
            "computing balances"
        );
        compute_balances(&expenses, &settlements)
    }

    /// Balances and suggested settlements for a group
    ///
    /// Every group member gets a row, with an explicit zero when they appear
    /// in no record. Rows are sorted by name.
    pub fn summary(&self, group: &Group) -> SplitlyResult<GroupBalanceSummary> {
        let balances = self.balances(group)?;
        let suggested = compute_settlements(&balances)?;
        debug!(group = %group.id, suggestions = suggested.len(), "matched settlements");

        let mut member_ids: Vec<MemberId> = group.members.iter().copied().collect();
        for (member, _) in balances.iter() {
            if !group.has_member(member) {
                member_ids.push(member);
            }
        }

        let mut rows = Vec::with_capacity(member_ids.len());
        for member_id in member_ids {
            let balance = balances.get(member_id);
            rows.push(MemberBalanceRow {
                member_id,
                name: self.name_of(member_id)?,
                balance,
                status: BalanceStatus::of(balance),
            });
        }
        rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        let mut suggestions = Vec::with_capacity(suggested.len());
        for s in suggested {
            suggestions.push(NamedSettlement {
                from_name: self.name_of(s.from_member)?,
                to_name: self.name_of(s.to_member)?,
                from_member: s.from_member,
                to_member: s.to_member,
                amount: s.amount,
            });
        }

        Ok(GroupBalanceSummary { rows, suggestions })
    }

    fn name_of(&self, member: MemberId) -> SplitlyResult<String> {
        MemberService::new(self.storage).display_name(member)
    }
}
