//! Domain types for the todo client.
//!
//! These are the wire-level shapes exchanged with the remote todo service.
//! Records serialize camelCase (`userId`) to match the service's JSON.

use serde::{Deserialize, Serialize};

/// Unique identifier for a todo record
///
/// Ids are server-shaped positive integers, unique within the collection
/// at all times.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw integer
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the user owning a todo record
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Creates a `UserId` from a raw integer
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo record as held by the remote service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRecord {
    /// Unique identifier
    pub id: TodoId,
    /// Owning user
    pub user_id: UserId,
    /// Title of the todo
    pub title: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoRecord {
    /// Creates a new, not-yet-completed todo record
    #[must_use]
    pub const fn new(id: TodoId, user_id: UserId, title: String) -> Self {
        Self {
            id,
            user_id,
            title,
            completed: false,
        }
    }
}

/// Response shape of a partial completion update
///
/// The toggle operation PUTs only `{"completed": bool}`; the service echoes
/// the patched fields plus the record id. Reconciliation keys on this id,
/// so a response for a different record is applied to that record (or
/// dropped if it no longer exists), never blindly merged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedPatch {
    /// Id of the patched record
    pub id: TodoId,
    /// The completion value now held by the server
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_record_serializes_camel_case() {
        let record = TodoRecord::new(TodoId::new(1), UserId::new(5), "Buy milk".to_string());
        let json = match serde_json::to_value(&record) {
            Ok(json) => json,
            Err(e) => unreachable!("serialization failed: {e}"),
        };

        assert_eq!(json["id"], 1);
        assert_eq!(json["userId"], 5);
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn todo_record_deserializes_service_shape() {
        let json = r#"{"userId":5,"id":3,"title":"A","completed":true}"#;
        let record: TodoRecord = match serde_json::from_str(json) {
            Ok(record) => record,
            Err(e) => unreachable!("deserialization failed: {e}"),
        };

        assert_eq!(record.id, TodoId::new(3));
        assert_eq!(record.user_id, UserId::new(5));
        assert!(record.completed);
    }

    #[test]
    fn new_record_starts_uncompleted() {
        let record = TodoRecord::new(TodoId::new(9), UserId::new(2), "Test".to_string());
        assert!(!record.completed);
    }

    #[test]
    fn ids_display_as_raw_integers() {
        assert_eq!(TodoId::new(42).to_string(), "42");
        assert_eq!(UserId::new(7).to_string(), "7");
    }
}
