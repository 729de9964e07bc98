//! Input and output records of the ledger engine
//!
//! These are transient values built from the persisted models for a single
//! calculation. They carry only what the arithmetic needs.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;

use crate::error::{SplitlyError, SplitlyResult};
use crate::models::{Amount, MemberId, SETTLED_TOLERANCE};

/// An expense as seen by the balance calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub amount: Amount,
    pub paid_by: MemberId,
    pub split_members: BTreeSet<MemberId>,
}

impl ExpenseRecord {
    pub fn new(
        amount: Amount,
        paid_by: MemberId,
        split_members: impl IntoIterator<Item = MemberId>,
    ) -> Self {
        Self {
            amount,
            paid_by,
            split_members: split_members.into_iter().collect(),
        }
    }

    /// Each split member's share, failing on records that cannot be divided
    pub fn share(&self) -> SplitlyResult<Amount> {
        if !self.amount.is_finite() || !self.amount.is_positive() {
            return Err(SplitlyError::InvalidExpense(format!(
                "amount must be a positive number, got {}",
                self.amount.value()
            )));
        }

        self.amount.share(self.split_members.len()).ok_or_else(|| {
            SplitlyError::InvalidExpense(format!(
                "expense of {} paid by {} has no split members",
                self.amount, self.paid_by
            ))
        })
    }
}

/// A completed transfer as seen by the balance calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementRecord {
    pub from_member: MemberId,
    pub to_member: MemberId,
    pub amount: Amount,
}

impl SettlementRecord {
    pub fn new(from_member: MemberId, to_member: MemberId, amount: Amount) -> Self {
        Self {
            from_member,
            to_member,
            amount,
        }
    }

    pub fn validate(&self) -> SplitlyResult<()> {
        if !self.amount.is_finite() || !self.amount.is_positive() {
            return Err(SplitlyError::InvalidSettlement(format!(
                "amount must be a positive number, got {}",
                self.amount.value()
            )));
        }

        Ok(())
    }
}

/// Signed net balance per member
///
/// Positive balances are owed money, negative balances owe money. A member
/// without an entry has a balance of zero. Iteration is in ascending member
/// ID order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceMap(BTreeMap<MemberId, Amount>);

impl BalanceMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Balance of a member, zero when absent
    pub fn get(&self, member: MemberId) -> Amount {
        self.0.get(&member).copied().unwrap_or_default()
    }

    pub fn contains(&self, member: MemberId) -> bool {
        self.0.contains_key(&member)
    }

    /// Increase what a member is owed
    pub fn credit(&mut self, member: MemberId, amount: Amount) {
        *self.0.entry(member).or_default() += amount;
    }

    /// Increase what a member owes
    pub fn debit(&mut self, member: MemberId, amount: Amount) {
        *self.0.entry(member).or_default() -= amount;
    }

    pub fn iter(&self) -> impl Iterator<Item = (MemberId, Amount)> + '_ {
        self.0.iter().map(|(member, amount)| (*member, *amount))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all balances; zero for a self-consistent ledger
    pub fn total(&self) -> Amount {
        self.0.values().sum()
    }

    /// True when every balance is within the settled tolerance
    pub fn is_settled(&self) -> bool {
        self.0.values().all(Amount::is_settled)
    }

    /// Members owed more than the tolerance
    pub fn creditor_count(&self) -> usize {
        self.0
            .values()
            .filter(|a| a.value() > SETTLED_TOLERANCE)
            .count()
    }

    /// Members owing more than the tolerance
    pub fn debtor_count(&self) -> usize {
        self.0
            .values()
            .filter(|a| a.value() < -SETTLED_TOLERANCE)
            .count()
    }
}

impl FromIterator<(MemberId, Amount)> for BalanceMap {
    fn from_iter<I: IntoIterator<Item = (MemberId, Amount)>>(iter: I) -> Self {
        let mut balances = Self::new();
        for (member, amount) in iter {
            balances.credit(member, amount);
        }
        balances
    }
}

impl IntoIterator for BalanceMap {
    type Item = (MemberId, Amount);
    type IntoIter = btree_map::IntoIter<MemberId, Amount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A proposed transfer that moves balances toward zero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedSettlement {
    pub from_member: MemberId,
    pub to_member: MemberId,
    /// Rounded to two decimal places
    pub amount: Amount,
}
