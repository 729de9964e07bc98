//! Audit logging system for Splitly
//!
//! Records every change to members, groups, expenses and settlements with
//! before/after values in an append-only, line-delimited JSON log.
//!
//! - `AuditEntry`: a single operation with timestamp, entity information and
//!   optional before/after snapshots.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
