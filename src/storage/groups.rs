//! Group repository for JSON storage
//!
//! Manages loading and saving groups to groups.json, with a join-code index.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SplitlyError;
use crate::models::{Group, GroupId, MemberId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable group data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GroupData {
    groups: Vec<Group>,
}

/// Repository for group persistence
pub struct GroupRepository {
    path: PathBuf,
    data: RwLock<HashMap<GroupId, Group>>,
    /// Index: normalized code -> group_id
    by_code: RwLock<HashMap<String, GroupId>>,
}

impl GroupRepository {
    /// Create a new group repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_code: RwLock::new(HashMap::new()),
        }
    }

    /// Load groups from disk and rebuild the code index
    pub fn load(&self) -> Result<(), SplitlyError> {
        let file_data: GroupData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_code = self.by_code.write().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        by_code.clear();

        for group in file_data.groups {
            by_code.insert(Group::normalize_code(&group.code), group.id);
            data.insert(group.id, group);
        }

        Ok(())
    }

    /// Save groups to disk
    pub fn save(&self) -> Result<(), SplitlyError> {
        let file_data = GroupData {
            groups: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a group by ID
    pub fn get(&self, id: GroupId) -> Result<Option<Group>, SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all groups sorted by name
    pub fn get_all(&self) -> Result<Vec<Group>, SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut groups: Vec<_> = data.values().cloned().collect();
        groups.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(groups)
    }

    /// Get the groups a member belongs to
    pub fn get_for_member(&self, member: MemberId) -> Result<Vec<Group>, SplitlyError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|g| g.has_member(member))
            .collect())
    }

    /// Get a group by join code (case-insensitive)
    pub fn get_by_code(&self, code: &str) -> Result<Option<Group>, SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let by_code = self.by_code.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(by_code
            .get(&Group::normalize_code(code))
            .and_then(|id| data.get(id))
            .cloned())
    }

    /// Get a group by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Group>, SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let name = name.trim().to_lowercase();
        Ok(data
            .values()
            .find(|g| g.name.trim().to_lowercase() == name)
            .cloned())
    }

    /// Check if a join code is already taken
    pub fn code_exists(&self, code: &str) -> Result<bool, SplitlyError> {
        let by_code = self.by_code.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(by_code.contains_key(&Group::normalize_code(code)))
    }

    /// Insert or update a group
    pub fn upsert(&self, group: Group) -> Result<(), SplitlyError> {
        let mut data = self.data.write().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_code = self.by_code.write().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(old) = data.get(&group.id) {
            by_code.remove(&Group::normalize_code(&old.code));
        }

        by_code.insert(Group::normalize_code(&group.code), group.id);
        data.insert(group.id, group);
        Ok(())
    }

    /// Count groups
    pub fn count(&self) -> Result<usize, SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}
