//! Core data models for Splitly
//!
//! This module contains the persisted records of the expense-sharing domain:
//! members, groups, expenses and settlements, plus the ID and amount types
//! they share.

pub mod amount;
pub mod expense;
pub mod group;
pub mod ids;
pub mod member;
pub mod settlement;

pub use amount::{Amount, AmountParseError, SETTLED_TOLERANCE};
pub use expense::{Expense, ExpenseValidationError};
pub use group::{Group, GroupValidationError, GROUP_CODE_LEN};
pub use ids::{ExpenseId, GroupId, MemberId, SettlementId};
pub use member::{Member, MemberValidationError};
pub use settlement::{Settlement, SettlementValidationError};
