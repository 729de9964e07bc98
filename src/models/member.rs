//! Member model
//!
//! A person who can pay for and share expenses. Members exist independently
//! of groups and join groups through a group's join code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MemberId;

/// A person taking part in shared expenses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,

    /// Display name
    pub name: String,

    /// Optional contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// When the member was created
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Create a new member
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            email: None,
            created_at: Utc::now(),
        }
    }

    /// Create a new member with a contact email
    pub fn with_email(name: impl Into<String>, email: impl Into<String>) -> Self {
        let mut member = Self::new(name);
        member.email = Some(email.into());
        member
    }

    /// Normalize a member name for matching
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Check if this member matches a name (case-insensitive)
    pub fn matches_name(&self, name: &str) -> bool {
        Self::normalize_name(&self.name) == Self::normalize_name(name)
    }

    /// Validate the member
    pub fn validate(&self) -> Result<(), MemberValidationError> {
        if self.name.trim().is_empty() {
            return Err(MemberValidationError::EmptyName);
        }

        let length = self.name.chars().count();
        if length > 100 {
            return Err(MemberValidationError::NameTooLong(length));
        }

        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(MemberValidationError::InvalidEmail(email.clone()));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for members
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidEmail(String),
}

impl fmt::Display for MemberValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Member name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Member name too long ({} chars, max 100)", len)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
        }
    }
}

impl std::error::Error for MemberValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member() {
        let member = Member::new("Alice");
        assert_eq!(member.name, "Alice");
        assert!(member.email.is_none());
        assert!(member.validate().is_ok());
    }

    #[test]
    fn test_matches_name() {
        let member = Member::new("Alice");
        assert!(member.matches_name("  alice "));
        assert!(!member.matches_name("Bob"));
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            Member::new("   ").validate(),
            Err(MemberValidationError::EmptyName)
        );
        assert_eq!(
            Member::new("a".repeat(101)).validate(),
            Err(MemberValidationError::NameTooLong(101))
        );
        assert!(matches!(
            Member::with_email("Bob", "bob.example.com").validate(),
            Err(MemberValidationError::InvalidEmail(_))
        ));
        assert!(Member::with_email("Bob", "bob@example.com").validate().is_ok());
    }
}
