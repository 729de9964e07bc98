//! Reports module for Splitly
//!
//! Provides the group report: balances, suggested settlements and expense
//! history for one group.

pub mod group_report;

pub use group_report::{ExpenseLine, GroupReport, ReportSummary};
