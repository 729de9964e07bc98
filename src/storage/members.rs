//! Member repository for JSON storage
//!
//! Manages loading and saving members to members.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SplitlyError;
use crate::models::{Member, MemberId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable member data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct MemberData {
    members: Vec<Member>,
}

/// Repository for member persistence
pub struct MemberRepository {
    path: PathBuf,
    data: RwLock<HashMap<MemberId, Member>>,
}

impl MemberRepository {
    /// Create a new member repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load members from disk
    pub fn load(&self) -> Result<(), SplitlyError> {
        let file_data: MemberData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for member in file_data.members {
            data.insert(member.id, member);
        }

        Ok(())
    }

    /// Save members to disk
    pub fn save(&self) -> Result<(), SplitlyError> {
        let file_data = MemberData {
            members: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a member by ID
    pub fn get(&self, id: MemberId) -> Result<Option<Member>, SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all members sorted by name
    pub fn get_all(&self) -> Result<Vec<Member>, SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut members: Vec<_> = data.values().cloned().collect();
        members.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(members)
    }

    /// Get a member by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Member>, SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.values().find(|m| m.matches_name(name)).cloned())
    }

    /// Check if a name is already taken, optionally ignoring one member
    pub fn name_exists(&self, name: &str, exclude_id: Option<MemberId>) -> Result<bool, SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .values()
            .any(|m| m.matches_name(name) && Some(m.id) != exclude_id))
    }

    /// Insert or update a member
    pub fn upsert(&self, member: Member) -> Result<(), SplitlyError> {
        let mut data = self.data.write().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(member.id, member);
        Ok(())
    }

    /// Count members
    pub fn count(&self) -> Result<usize, SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, MemberRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("members.json");
        let repo = MemberRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        let alice = Member::new("Alice");
        repo.upsert(alice.clone()).unwrap();

        let found = repo.get_by_name("ALICE").unwrap().unwrap();
        assert_eq!(found.id, alice.id);
        assert!(repo.get(alice.id).unwrap().is_some());
        assert!(repo.get_by_name("Bob").unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.upsert(Member::new("Bob")).unwrap();
        repo.upsert(Member::new("alice")).unwrap();
        repo.save().unwrap();

        let repo2 = MemberRepository::new(temp_dir.path().join("members.json"));
        repo2.load().unwrap();

        let names: Vec<_> = repo2.get_all().unwrap().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["alice", "Bob"]);
    }

    #[test]
    fn test_name_exists() {
        let (_temp_dir, repo) = create_test_repo();
        let alice = Member::new("Alice");
        repo.upsert(alice.clone()).unwrap();

        assert!(repo.name_exists("alice", None).unwrap());
        assert!(!repo.name_exists("alice", Some(alice.id)).unwrap());
    }
}
