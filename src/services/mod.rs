//! Service layer for Splitly
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, membership checks, and feeding the ledger engine.

pub mod balance;
pub mod expense;
pub mod group;
pub mod member;
pub mod settlement;

pub use balance::{
    BalanceService, BalanceStatus, GroupBalanceSummary, MemberBalanceRow, NamedSettlement,
};
pub use expense::ExpenseService;
pub use group::GroupService;
pub use member::MemberService;
pub use settlement::SettlementService;
