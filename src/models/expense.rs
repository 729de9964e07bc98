//! Expense model
//!
//! An expense is paid by one member and shared equally among a set of
//! members of the same group. The payer may or may not be part of the split.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::amount::Amount;
use super::ids::{ExpenseId, GroupId, MemberId};
use crate::ledger::ExpenseRecord;

/// A shared expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Group the expense belongs to
    pub group_id: GroupId,

    /// What the money was spent on
    pub description: String,

    /// Total amount paid
    pub amount: Amount,

    /// Member who paid
    pub paid_by: MemberId,

    /// Members sharing the cost equally
    pub split_members: BTreeSet<MemberId>,

    /// When the expense was logged
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense dated now
    pub fn new(
        group_id: GroupId,
        description: impl Into<String>,
        amount: Amount,
        paid_by: MemberId,
        split_members: impl IntoIterator<Item = MemberId>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            group_id,
            description: description.into(),
            amount,
            paid_by,
            split_members: split_members.into_iter().collect(),
            date: Utc::now(),
        }
    }

    /// The record the balance calculator consumes
    pub fn to_record(&self) -> ExpenseRecord {
        ExpenseRecord {
            amount: self.amount,
            paid_by: self.paid_by,
            split_members: self.split_members.clone(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        let length = self.description.chars().count();
        if length > 200 {
            return Err(ExpenseValidationError::DescriptionTooLong(length));
        }

        if !self.amount.is_finite() || !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.split_members.is_empty() {
            return Err(ExpenseValidationError::EmptySplit);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    DescriptionTooLong(usize),
    NonPositiveAmount(Amount),
    EmptySplit,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::DescriptionTooLong(len) => {
                write!(f, "Expense description too long ({} chars, max 200)", len)
            }
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount.value())
            }
            Self::EmptySplit => write!(f, "Expense must be split among at least one member"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
