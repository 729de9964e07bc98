//! Settlement model
//!
//! A settlement records money that has actually changed hands between two
//! group members, reducing what the payer owes and what the receiver is owed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::{GroupId, MemberId, SettlementId};
use crate::ledger::SettlementRecord;

/// A completed transfer between two members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settlement {
    /// Unique identifier
    pub id: SettlementId,

    /// Group the settlement belongs to
    pub group_id: GroupId,

    /// Member who paid
    pub from_member: MemberId,

    /// Member who received the money
    pub to_member: MemberId,

    /// Amount transferred
    pub amount: Amount,

    /// When the settlement was recorded
    pub date: DateTime<Utc>,
}

impl Settlement {
    /// Create a new settlement dated now
    pub fn new(group_id: GroupId, from_member: MemberId, to_member: MemberId, amount: Amount) -> Self {
        Self {
            id: SettlementId::new(),
            group_id,
            from_member,
            to_member,
            amount,
            date: Utc::now(),
        }
    }

    /// The record the balance calculator consumes
    pub fn to_record(&self) -> SettlementRecord {
        SettlementRecord {
            from_member: self.from_member,
            to_member: self.to_member,
            amount: self.amount,
        }
    }

    /// Validate the settlement
    pub fn validate(&self) -> Result<(), SettlementValidationError> {
        if !self.amount.is_finite() || !self.amount.is_positive() {
            return Err(SettlementValidationError::NonPositiveAmount(self.amount));
        }

        if self.from_member == self.to_member {
            return Err(SettlementValidationError::SelfTransfer);
        }

        Ok(())
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.from_member, self.to_member, self.amount)
    }
}

/// Validation errors for settlements
#[derive(Debug, Clone, PartialEq)]
pub enum SettlementValidationError {
    NonPositiveAmount(Amount),
    SelfTransfer,
}

impl fmt::Display for SettlementValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Settlement amount must be positive, got {}", amount.value())
            }
            Self::SelfTransfer => write!(f, "A member cannot settle with themselves"),
        }
    }
}

impl std::error::Error for SettlementValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_record() {
        let (a, b) = (MemberId::new(), MemberId::new());
        let settlement = Settlement::new(GroupId::new(), a, b, Amount::new(12.5));
        let record = settlement.to_record();
        assert_eq!(record.from_member, a);
        assert_eq!(record.to_member, b);
        assert_eq!(record.amount.value(), 12.5);
    }

    #[test]
    fn test_validation() {
        let (a, b) = (MemberId::new(), MemberId::new());
        let group = GroupId::new();

        assert!(Settlement::new(group, a, b, Amount::new(1.0)).validate().is_ok());
        assert_eq!(
            Settlement::new(group, a, a, Amount::new(1.0)).validate(),
            Err(SettlementValidationError::SelfTransfer)
        );
        assert!(matches!(
            Settlement::new(group, a, b, Amount::new(-3.0)).validate(),
            Err(SettlementValidationError::NonPositiveAmount(_))
        ));
    }
}
