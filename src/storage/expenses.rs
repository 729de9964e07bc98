//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json, indexed by group.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SplitlyError;
use crate::models::{Expense, ExpenseId, GroupId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence with a group index
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
    /// Index: group_id -> expense_ids
    by_group: RwLock<HashMap<GroupId, Vec<ExpenseId>>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_group: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk and build the group index
    pub fn load(&self) -> Result<(), SplitlyError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_group = self.by_group.write().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        by_group.clear();

        for expense in file_data.expenses {
            by_group.entry(expense.group_id).or_default().push(expense.id);
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk, oldest first
    pub fn save(&self) -> Result<(), SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| a.date.cmp(&b.date));

        let file_data = ExpenseData { expenses };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all expenses, newest first
    pub fn get_all(&self) -> Result<Vec<Expense>, SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    /// Get a group's expenses, newest first
    pub fn get_by_group(&self, group_id: GroupId) -> Result<Vec<Expense>, SplitlyError> {
        let data = self.data.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let by_group = self.by_group.read().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut expenses: Vec<_> = by_group
            .get(&group_id)
            .map(|ids| ids.iter().filter_map(|id| data.get(id).cloned()).collect())
            .unwrap_or_default();

        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), SplitlyError> {
        let mut data = self.data.write().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_group = self.by_group.write().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(old) = data.get(&expense.id) {
            if let Some(ids) = by_group.get_mut(&old.group_id) {
                ids.retain(|&id| id != expense.id);
            }
        }

        by_group.entry(expense.group_id).or_default().push(expense.id);
        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> Result<bool, SplitlyError> {
        let mut data = self.data.write().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_group = self.by_group.write().map_err(|e| {
            SplitlyError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data.remove(&id) {
            Some(expense) => {
                if let Some(ids) = by_group.get_mut(&expense.group_id) {
                    ids.retain(|&eid| eid != id);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Count expenses
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
    use crate::models::{Amount, MemberId};
    use chrono::Duration;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn expense(group: GroupId, description: &str) -> Expense {
        let payer = MemberId::new();
        Expense::new(group, description, Amount::new(10.0), payer, [payer])
    }

    #[test]
    fn test_get_by_group_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        let group = GroupId::new();

        let mut older = expense(group, "Older");
        older.date -= Duration::days(1);
        repo.upsert(older).unwrap();
        repo.upsert(expense(group, "Newer")).unwrap();
        repo.upsert(expense(GroupId::new(), "Elsewhere")).unwrap();

        let found = repo.get_by_group(group).unwrap();
        let names: Vec<_> = found.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["Newer", "Older"]);
    }

    #[test]
    fn test_delete_updates_index() {
        let (_temp_dir, repo) = create_test_repo();
        let group = GroupId::new();
        let e = expense(group, "Taxi");
        repo.upsert(e.clone()).unwrap();

        assert!(repo.delete(e.id).unwrap());
        assert!(!repo.delete(e.id).unwrap());
        assert!(repo.get_by_group(group).unwrap().is_empty());
    }

    #[test]
    fn test_upsert_existing_does_not_duplicate() {
        let (_temp_dir, repo) = create_test_repo();
        let group = GroupId::new();
        let mut e = expense(group, "Taxi");
        repo.upsert(e.clone()).unwrap();
        e.description = "Cab".into();
        repo.upsert(e).unwrap();

        let found = repo.get_by_group(group).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].description, "Cab");
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let group = GroupId::new();
        repo.upsert(expense(group, "Groceries")).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get_by_group(group).unwrap().len(), 1);
        assert_eq!(repo2.get_all().unwrap().len(), 1);
        assert_eq!(repo2.count().unwrap(), 1);
    }
}
