//! Member service
//!
//! Provides business logic for member management.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{SplitlyError, SplitlyResult};
use crate::models::{Member, MemberId};
use crate::storage::Storage;

/// Service for member management
pub struct MemberService<'a> {
    storage: &'a Storage,
}

impl<'a> MemberService<'a> {
    /// Create a new member service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new member
    pub fn create(&self, name: &str, email: Option<&str>) -> SplitlyResult<Member> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SplitlyError::Validation("Member name cannot be empty".into()));
        }

        if self.storage.members.name_exists(name, None)? {
            return Err(SplitlyError::Duplicate {
                entity_type: "Member",
                identifier: name.to_string(),
            });
        }

        let member = match email.map(str::trim).filter(|e| !e.is_empty()) {
            Some(email) => Member::with_email(name, email),
            None => Member::new(name),
        };

        member
            .validate()
            .map_err(|e| SplitlyError::Validation(e.to_string()))?;

        self.storage.members.upsert(member.clone())?;
        self.storage.members.save()?;

        self.storage.log_create(
            EntityType::Member,
            member.id.to_string(),
            Some(member.name.clone()),
            &member,
        )?;

        info!(member = %member.id, name = %member.name, "created member");
        Ok(member)
    }

    /// Get a member by ID
    pub fn get(&self, id: MemberId) -> SplitlyResult<Option<Member>> {
        self.storage.members.get(id)
    }

    /// Find a member by name, full ID or short display ID
    pub fn find(&self, identifier: &str) -> SplitlyResult<Option<Member>> {
        if let Some(member) = self.storage.members.get_by_name(identifier)? {
            return Ok(Some(member));
        }

        if let Ok(id) = identifier.parse::<MemberId>() {
            if let Some(member) = self.storage.members.get(id)? {
                return Ok(Some(member));
            }
        }

        let identifier = identifier.trim();
        Ok(self
            .storage
            .members
            .get_all()?
            .into_iter()
            .find(|m| m.id.matches_short(identifier)))
    }

    /// Find a member or fail with NotFound
    pub fn require(&self, identifier: &str) -> SplitlyResult<Member> {
        self.find(identifier)?
            .ok_or_else(|| SplitlyError::member_not_found(identifier))
    }

    /// Get all members, sorted by name
    pub fn list(&self) -> SplitlyResult<Vec<Member>> {
        self.storage.members.get_all()
    }

    /// Resolve a member's display name, "Unknown" when missing
    pub fn display_name(&self, id: MemberId) -> SplitlyResult<String> {
        Ok(self
            .storage
            .members
            .get(id)?
            .map(|m| m.name)
            .unwrap_or_else(|| "Unknown".to_string()))
    }
}
