//! Settlement repository for JSON storage
//!
//! Manages loading and saving recorded settlements to settlements.json.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SplitlyError;
use crate::models::{GroupId, Settlement, SettlementId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable settlement data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SettlementData {
    settlements: Vec<Settlement>,
}

/// Repository for settlement persistence
pub struct SettlementRepository {
    path: PathBuf,
    data: RwLock<HashMap<SettlementId, Settlement>>,
}

impl SettlementRepository {
    /// Create a new settlement repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load settlements from disk
    pub fn load(&self) -> Result<(), SplitlyError> {
        let file_data: SettlementData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for settlement in file_data.settlements {
            data.insert(settlement.id, settlement);
        }

        Ok(())
    }

    /// Save settlements to disk, oldest first
    pub fn save(&self) -> Result<(), SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut settlements: Vec<_> = data.values().cloned().collect();
        settlements.sort_by(|a, b| a.date.cmp(&b.date));

        let file_data = SettlementData { settlements };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a group's settlements, newest first
    pub fn get_by_group(&self, group_id: GroupId) -> Result<Vec<Settlement>, SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut settlements: Vec<_> = data
            .values()
            .filter(|s| s.group_id == group_id)
            .cloned()
            .collect();
        settlements.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(settlements)
    }

    /// Insert or update a settlement
    pub fn upsert(&self, settlement: Settlement) -> Result<(), SplitlyError> {
        let mut data = self.data.write().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(settlement.id, settlement);
        Ok(())
    }

    /// Count settlements
    pub fn count(&self) -> Result<usize, SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}
