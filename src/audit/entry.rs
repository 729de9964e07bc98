//! Audit log records
//!
//! One JSON line per change to a member, group, expense or settlement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What happened to the entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of record the entry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Member,
    Group,
    Expense,
    Settlement,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Group => "Group",
            Self::Expense => "Expense",
            Self::Settlement => "Settlement",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single audit log entry
///
/// `before` is absent for creates and `after` is absent for deletes. Snapshots
/// that fail to serialize are dropped rather than failing the write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    pub entity_id: String,

    /// Member or group name, expense description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// Short description of an update, e.g. "joined: Carol"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

fn snapshot<T: Serialize>(entity: &T) -> Option<Value> {
    serde_json::to_value(entity).ok()
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: None,
            note: None,
        }
    }

    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            after: snapshot(entity),
            ..Self::new(Operation::Create, entity_type, entity_id, entity_name)
        }
    }

    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        note: Option<String>,
    ) -> Self {
        Self {
            before: snapshot(before),
            after: snapshot(after),
            note,
            ..Self::new(Operation::Update, entity_type, entity_id, entity_name)
        }
    }

    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            before: snapshot(entity),
            ..Self::new(Operation::Delete, entity_type, entity_id, entity_name)
        }
    }

    /// One line per entry, plus an indented note for updates
    pub fn format_human_readable(&self) -> String {
        let mut line = format!(
            "{}  {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            line.push_str(&format!(" \"{}\"", name));
        }
        if let Some(note) = &self.note {
            line.push_str(&format!("\n    {}", note));
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_and_delete_snapshots() {
        let data = json!({"description": "Dinner", "amount": 90.0});

        let created = AuditEntry::create(
            EntityType::Expense,
            "exp-12345678",
            Some("Dinner".to_string()),
            &data,
        );
        assert_eq!(created.operation, Operation::Create);
        assert!(created.before.is_none());
        assert_eq!(created.after, Some(data.clone()));

        let deleted = AuditEntry::delete(EntityType::Expense, "exp-12345678", None, &data);
        assert_eq!(deleted.before, Some(data));
        assert!(deleted.after.is_none());
    }

    #[test]
    fn test_serialization_uses_lowercase_tags() {
        let entry = AuditEntry::delete(EntityType::Settlement, "stl-1", None, &json!({}));

        let line = serde_json::to_string(&entry).unwrap();
        assert!(line.contains("\"operation\":\"delete\""));
        assert!(line.contains("\"entity_type\":\"settlement\""));
        assert!(!line.contains("note"));

        let parsed: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.entity_type, EntityType::Settlement);
    }

    #[test]
    fn test_human_readable_update() {
        let entry = AuditEntry::update(
            EntityType::Group,
            "grp-12345678",
            Some("Trip".to_string()),
            &json!({"members": 2}),
            &json!({"members": 3}),
            Some("joined: Carol".to_string()),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Group grp-12345678 \"Trip\""));
        assert!(formatted.ends_with("\n    joined: Carol"));
    }
}
