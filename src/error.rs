//! Custom error types for Splitly
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Splitly operations
#[derive(Error, Debug)]
pub enum SplitlyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Member is not part of the group an operation targets
    #[error("{member} is not a member of group '{group}'")]
    NotAMember { member: String, group: String },

    /// An expense cannot enter the balance calculation
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),

    /// A recorded settlement cannot enter the balance calculation
    #[error("Invalid settlement: {0}")]
    InvalidSettlement(String),

    /// A balance handed to the settlement matcher is not a finite number
    #[error("Invalid balance for member {member}: {value}")]
    InvalidBalance { member: String, value: f64 },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SplitlyError {
    /// Create a "not found" error for members
    pub fn member_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Member",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for groups
    pub fn group_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Group",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error was raised by the balance/settlement engine
    pub fn is_ledger_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidExpense(_) | Self::InvalidSettlement(_) | Self::InvalidBalance { .. }
        )
    }
}

impl From<std::io::Error> for SplitlyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SplitlyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Splitly operations
pub type SplitlyResult<T> = Result<T, SplitlyError>;
