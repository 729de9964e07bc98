//! Group model
//!
//! A group is a set of members sharing expenses. Members join with a short
//! alphanumeric code that the creator hands out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

use super::ids::{GroupId, MemberId};

/// Length of a group join code
pub const GROUP_CODE_LEN: usize = 6;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// An expense-sharing group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier
    pub id: GroupId,

    /// Group name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Join code (uppercase alphanumeric)
    pub code: String,

    /// Member who created the group
    pub created_by: MemberId,

    /// Current members
    #[serde(default)]
    pub members: BTreeSet<MemberId>,

    /// When the group was created
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Create a new group; the creator is its first member
    pub fn new(name: impl Into<String>, created_by: MemberId) -> Self {
        let mut members = BTreeSet::new();
        members.insert(created_by);

        Self {
            id: GroupId::new(),
            name: name.into(),
            description: String::new(),
            code: Self::generate_code(),
            created_by,
            members,
            created_at: Utc::now(),
        }
    }

    /// Generate a fresh random join code
    pub fn generate_code() -> String {
        Uuid::new_v4()
            .as_bytes()
            .iter()
            .take(GROUP_CODE_LEN)
            .map(|b| CODE_ALPHABET[*b as usize % CODE_ALPHABET.len()] as char)
            .collect()
    }

    /// Normalize a join code for lookup
    pub fn normalize_code(code: &str) -> String {
        code.trim().to_uppercase()
    }

    /// Check whether a member belongs to the group
    pub fn has_member(&self, member: MemberId) -> bool {
        self.members.contains(&member)
    }

    /// Add a member; returns false if they were already in the group
    pub fn add_member(&mut self, member: MemberId) -> bool {
        self.members.insert(member)
    }

    /// Validate the group
    pub fn validate(&self) -> Result<(), GroupValidationError> {
        if self.name.trim().is_empty() {
            return Err(GroupValidationError::EmptyName);
        }

        let length = self.name.chars().count();
        if length > 100 {
            return Err(GroupValidationError::NameTooLong(length));
        }

        if self.code.len() != GROUP_CODE_LEN
            || !self
                .code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(GroupValidationError::InvalidCode(self.code.clone()));
        }

        if !self.members.contains(&self.created_by) {
            return Err(GroupValidationError::CreatorNotMember);
        }

        Ok(())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.code)
    }
}

/// Validation errors for groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidCode(String),
    CreatorNotMember,
}

impl fmt::Display for GroupValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Group name cannot be empty"),
            Self::NameTooLong(len) => write!(f, "Group name too long ({} chars, max 100)", len),
            Self::InvalidCode(code) => write!(f, "Invalid group code: {}", code),
            Self::CreatorNotMember => write!(f, "Group creator must be a member"),
        }
    }
}

impl std::error::Error for GroupValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_group_includes_creator() {
        let creator = MemberId::new();
        let group = Group::new("Flat", creator);
        assert!(group.has_member(creator));
        assert_eq!(group.members.len(), 1);
        assert!(group.validate().is_ok());
    }

    #[test]
    fn test_generated_code_shape() {
        for _ in 0..50 {
            let code = Group::generate_code();
            assert_eq!(code.len(), GROUP_CODE_LEN);
            assert!(code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_add_member_is_idempotent() {
        let mut group = Group::new("Trip", MemberId::new());
        let other = MemberId::new();
        assert!(group.add_member(other));
        assert!(!group.add_member(other));
        assert_eq!(group.members.len(), 2);
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(Group::normalize_code(" ab12cd "), "AB12CD");
    }

    #[test]
    fn test_validation() {
        let mut group = Group::new("", MemberId::new());
        assert_eq!(group.validate(), Err(GroupValidationError::EmptyName));

        group.name = "Trip".into();
        group.code = "abc".into();
        assert!(matches!(
            group.validate(),
            Err(GroupValidationError::InvalidCode(_))
        ));

        group.code = Group::generate_code();
        group.members.clear();
        assert_eq!(group.validate(), Err(GroupValidationError::CreatorNotMember));
    }
}
