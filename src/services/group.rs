//! Group service
//!
//! Group creation, joining by code, and membership lookups.

use tracing::{debug, info};

use crate::audit::EntityType;
use crate::error::{SplitlyError, SplitlyResult};
use crate::models::{Group, GroupId, Member, MemberId};
use crate::storage::Storage;

/// Attempts at drawing an unused join code before giving up
const CODE_ATTEMPTS: usize = 32;

/// Service for group management
pub struct GroupService<'a> {
    storage: &'a Storage,
}

impl<'a> GroupService<'a> {
    /// Create a new group service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a group; the creator becomes its first member
    pub fn create(
        &self,
        name: &str,
        description: Option<&str>,
        creator: MemberId,
    ) -> SplitlyResult<Group> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SplitlyError::Validation("Group name cannot be empty".into()));
        }

        let creator_member = self
            .storage
            .members
            .get(creator)?
            .ok_or_else(|| SplitlyError::member_not_found(creator.to_string()))?;

        if self.storage.groups.get_by_name(name)?.is_some() {
            return Err(SplitlyError::Duplicate {
                entity_type: "Group",
                identifier: name.to_string(),
            });
        }

        let mut group = Group::new(name, creator_member.id);
        group.description = description.unwrap_or_default().trim().to_string();
        group.code = self.unused_code()?;

        group
            .validate()
            .map_err(|e| SplitlyError::Validation(e.to_string()))?;

        self.storage.groups.upsert(group.clone())?;
        self.storage.groups.save()?;

        self.storage.log_create(
            EntityType::Group,
            group.id.to_string(),
            Some(group.name.clone()),
            &group,
        )?;

        info!(group = %group.id, code = %group.code, creator = %creator_member.name, "created group");
        Ok(group)
    }

    fn unused_code(&self) -> SplitlyResult<String> {
        for _ in 0..CODE_ATTEMPTS {
            let code = Group::generate_code();
            if !self.storage.groups.code_exists(&code)? {
                return Ok(code);
            }
            debug!(%code, "join code collision, drawing again");
        }

        Err(SplitlyError::Storage(
            "Could not generate an unused group code".into(),
        ))
    }

    /// Join a group with its code
    pub fn join(&self, code: &str, member: MemberId) -> SplitlyResult<Group> {
        let mut group = self
            .storage
            .groups
            .get_by_code(code)?
            .ok_or_else(|| SplitlyError::NotFound {
                entity_type: "Group code",
                identifier: Group::normalize_code(code),
            })?;

        let joining = self
            .storage
            .members
            .get(member)?
            .ok_or_else(|| SplitlyError::member_not_found(member.to_string()))?;

        let before = group.clone();
        if !group.add_member(member) {
            return Err(SplitlyError::Duplicate {
                entity_type: "Group member",
                identifier: format!("{} in '{}'", joining.name, group.name),
            });
        }

        self.storage.groups.upsert(group.clone())?;
        self.storage.groups.save()?;

        self.storage.log_update(
            EntityType::Group,
            group.id.to_string(),
            Some(group.name.clone()),
            &before,
            &group,
            Some(format!("joined: {}", joining.name)),
        )?;

        info!(group = %group.id, member = %joining.name, "member joined group");
        Ok(group)
    }

    /// Get a group by ID
    pub fn get(&self, id: GroupId) -> SplitlyResult<Option<Group>> {
        self.storage.groups.get(id)
    }

    /// Find a group by name, join code, full ID or short display ID
    pub fn find(&self, identifier: &str) -> SplitlyResult<Option<Group>> {
        if let Some(group) = self.storage.groups.get_by_name(identifier)? {
            return Ok(Some(group));
        }

        if let Some(group) = self.storage.groups.get_by_code(identifier)? {
            return Ok(Some(group));
        }

        if let Ok(id) = identifier.parse::<GroupId>() {
            if let Some(group) = self.storage.groups.get(id)? {
                return Ok(Some(group));
            }
        }

        let identifier = identifier.trim();
        Ok(self
            .storage
            .groups
            .get_all()?
            .into_iter()
            .find(|g| g.id.matches_short(identifier)))
    }

    /// Find a group or fail with NotFound
    pub fn require(&self, identifier: &str) -> SplitlyResult<Group> {
        self.find(identifier)?
            .ok_or_else(|| SplitlyError::group_not_found(identifier))
    }

    /// Get all groups, sorted by name
    pub fn list(&self) -> SplitlyResult<Vec<Group>> {
        self.storage.groups.get_all()
    }

    /// Get the groups a member belongs to
    pub fn list_for_member(&self, member: MemberId) -> SplitlyResult<Vec<Group>> {
        self.storage.groups.get_for_member(member)
    }

    /// Resolve a group's members, sorted by name
    ///
    /// Members missing from the roster are skipped.
    pub fn members(&self, group: &Group) -> SplitlyResult<Vec<Member>> {
        let mut members = Vec::with_capacity(group.members.len());
        for id in &group.members {
            if let Some(member) = self.storage.members.get(*id)? {
                members.push(member);
            }
        }
        members.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(members)
    }

    /// Fail with NotAMember unless the member belongs to the group
    pub fn ensure_member(&self, group: &Group, member: MemberId) -> SplitlyResult<()> {
        if group.has_member(member) {
            return Ok(());
        }

        let name = self
            .storage
            .members
            .get(member)?
            .map(|m| m.name)
            .unwrap_or_else(|| member.to_string());

        Err(SplitlyError::NotAMember {
            member: name,
            group: group.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SplitlyPaths;
    use crate::services::MemberService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitlyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_group() {
        let (_temp_dir, storage) = create_test_storage();
        let alice = MemberService::new(&storage).create("Alice", None).unwrap();
        let service = GroupService::new(&storage);

        let group = service.create("Flat", Some("Shared flat"), alice.id).unwrap();

        assert_eq!(group.name, "Flat");
        assert_eq!(group.description, "Shared flat");
        assert_eq!(group.code.len(), crate::models::GROUP_CODE_LEN);
        assert!(group.has_member(alice.id));
    }

    #[test]
    fn test_create_requires_known_creator() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GroupService::new(&storage);

        let result = service.create("Flat", None, MemberId::new());
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_create_duplicate_name() {
        let (_temp_dir, storage) = create_test_storage();
        let alice = MemberService::new(&storage).create("Alice", None).unwrap();
        let service = GroupService::new(&storage);

        service.create("Trip", None, alice.id).unwrap();
        let result = service.create("trip", None, alice.id);
        assert!(matches!(result, Err(SplitlyError::Duplicate { .. })));
    }

    #[test]
    fn test_join_by_code() {
        let (_temp_dir, storage) = create_test_storage();
        let members = MemberService::new(&storage);
        let alice = members.create("Alice", None).unwrap();
        let bob = members.create("Bob", None).unwrap();
        let service = GroupService::new(&storage);

        let group = service.create("Trip", None, alice.id).unwrap();
        let joined = service.join(&group.code.to_lowercase(), bob.id).unwrap();

        assert!(joined.has_member(bob.id));
        assert_eq!(service.list_for_member(bob.id).unwrap().len(), 1);

        let names: Vec<_> = service
            .members(&joined)
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_join_invalid_code() {
        let (_temp_dir, storage) = create_test_storage();
        let alice = MemberService::new(&storage).create("Alice", None).unwrap();
        let service = GroupService::new(&storage);

        assert!(service.join("NOPE00", alice.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_join_twice_is_duplicate() {
        let (_temp_dir, storage) = create_test_storage();
        let alice = MemberService::new(&storage).create("Alice", None).unwrap();
        let service = GroupService::new(&storage);
        let group = service.create("Trip", None, alice.id).unwrap();

        let result = service.join(&group.code, alice.id);
        assert!(matches!(result, Err(SplitlyError::Duplicate { .. })));
    }

    #[test]
    fn test_find_by_name_code_and_id() {
        let (_temp_dir, storage) = create_test_storage();
        let alice = MemberService::new(&storage).create("Alice", None).unwrap();
        let service = GroupService::new(&storage);
        let group = service.create("Trip", None, alice.id).unwrap();

        assert_eq!(service.find("trip").unwrap().unwrap().id, group.id);
        assert_eq!(service.find(&group.code).unwrap().unwrap().id, group.id);
        assert_eq!(
            service.find(&group.id.to_string()).unwrap().unwrap().id,
            group.id
        );
        assert!(service.require("missing").unwrap_err().is_not_found());
    }

    #[test]
    fn test_ensure_member() {
        let (_temp_dir, storage) = create_test_storage();
        let members = MemberService::new(&storage);
        let alice = members.create("Alice", None).unwrap();
        let carol = members.create("Carol", None).unwrap();
        let service = GroupService::new(&storage);
        let group = service.create("Trip", None, alice.id).unwrap();

        assert!(service.ensure_member(&group, alice.id).is_ok());
        let err = service.ensure_member(&group, carol.id).unwrap_err();
        assert_eq!(err.to_string(), "Carol is not a member of group 'Trip'");
    }
}
