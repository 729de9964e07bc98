//! Balance and settle-up engine
//!
//! Two pure functions turn a group's ledger into something people can act on:
//!
//! - [`compute_balances`] folds expenses and recorded settlements into a
//!   signed net balance per member.
//! - [`compute_settlements`] proposes a short list of transfers that brings
//!   every balance back to zero.
//!
//! Neither function touches storage, logs, or holds state, so both can be
//! called from any thread on a snapshot of the ledger.
//!
//! # Example
//!
//! ```
//! use splitly::ledger::{compute_balances, compute_settlements, ExpenseRecord};
//! use splitly::models::{Amount, MemberId};
//!
//! let (a, b) = (MemberId::new(), MemberId::new());
//! let expenses = vec![
//!     ExpenseRecord::new(Amount::new(100.0), a, [a, b]),
//!     ExpenseRecord::new(Amount::new(40.0), b, [a, b]),
//! ];
//!
//! let balances = compute_balances(&expenses, &[])?;
//! assert_eq!(balances.get(a).value(), 30.0);
//!
//! let transfers = compute_settlements(&balances)?;
//! assert_eq!(transfers.len(), 1);
//! assert_eq!(transfers[0].from_member, b);
//! # Ok::<(), splitly::SplitlyError>(())
//! ```

pub mod balances;
pub mod matcher;
pub mod records;

pub use balances::compute_balances;
pub use matcher::compute_settlements;
pub use records::{BalanceMap, ExpenseRecord, SettlementRecord, SuggestedSettlement};
