//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kinds of audited events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A user was added to the credential store
    Register,
    /// A user authenticated
    Login,
    /// An expense was added to the ledger
    Create,
    /// The ledger was read from the expenses file
    Load,
    /// The ledger was written to the expenses file
    Save,
}

/// What an audit entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    User,
    Expense,
    Ledger,
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Username for user events, category for expenses, file name for the ledger
    pub entity_id: String,

    /// Logged-in user that triggered the event, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// JSON payload (the added record, or a record count)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new(operation: Operation, entity_type: EntityType, entity_id: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            user: None,
            details: None,
        }
    }

    pub fn register(username: &str) -> Self {
        Self::new(Operation::Register, EntityType::User, username)
    }

    pub fn login(username: &str) -> Self {
        let mut entry = Self::new(Operation::Login, EntityType::User, username);
        entry.user = Some(username.to_string());
        entry
    }

    /// An expense was added; `record` is stored as the payload
    pub fn create<T: Serialize>(category: &str, record: &T) -> Self {
        let mut entry = Self::new(Operation::Create, EntityType::Expense, category);
        entry.details = serde_json::to_value(record).ok();
        entry
    }

    pub fn load(file: &str, records: usize) -> Self {
        let mut entry = Self::new(Operation::Load, EntityType::Ledger, file);
        entry.details = Some(serde_json::json!({ "records": records }));
        entry
    }

    pub fn save(file: &str, records: usize) -> Self {
        let mut entry = Self::new(Operation::Save, EntityType::Ledger, file);
        entry.details = Some(serde_json::json!({ "records": records }));
        entry
    }

    /// Attribute the entry to a logged-in user
    pub fn by(mut self, user: Option<&str>) -> Self {
        if let Some(user) = user {
            self.user = Some(user.to_string());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_entry_has_no_password() {
        let entry = AuditEntry::register("alice");
        let json = serde_json::to_string(&entry).unwrap();

        assert_eq!(entry.entity_type, EntityType::User);
        assert!(json.contains("\"register\""));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_create_entry() {
        let record = json!({"date": "2024-01-01", "category": "Food", "amount": 12.5});
        let entry = AuditEntry::create("Food", &record).by(Some("alice"));

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_id, "Food");
        assert_eq!(entry.user.as_deref(), Some("alice"));
        assert_eq!(entry.details, Some(record));
    }

    #[test]
    fn test_save_entry_counts_records() {
        let entry = AuditEntry::save("expenses.txt", 3);
        assert_eq!(entry.details, Some(json!({"records": 3})));
        assert!(entry.user.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::load("expenses.txt", 2).by(Some("bob"));

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.operation, Operation::Load);
        assert_eq!(deserialized.entity_type, EntityType::Ledger);
        assert_eq!(deserialized.user.as_deref(), Some("bob"));
    }
}
