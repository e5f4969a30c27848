//! Mock todo service for testing.

use crate::error::{ApiError, Result};
use crate::providers::TodoApi;
use crate::types::{CompletedPatch, TodoId, TodoRecord};
use std::sync::{Arc, Mutex};

/// In-memory todo service.
///
/// Behaves like the real service: echoes created and updated records,
/// returns the patched fields for partial completion updates, and reports
/// nothing meaningful for deletes. A fail switch turns every call into a
/// rejected outcome with a fixed message.
#[derive(Clone, Debug, Default)]
pub struct MockTodoApi {
    records: Arc<Mutex<Vec<TodoRecord>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

// Mutex poison is unrecoverable in a test double.
#[allow(clippy::unwrap_used)]
impl MockTodoApi {
    /// Create a mock seeded with the given records
    #[must_use]
    pub fn new(seed: Vec<TodoRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(seed)),
            fail_with: Arc::new(Mutex::new(None)),
        }
    }

    /// Make every subsequent call fail with the given message
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.fail_with.lock().unwrap() = Some(message.into());
    }

    /// Stop failing calls
    pub fn recover(&self) {
        *self.fail_with.lock().unwrap() = None;
    }

    /// Snapshot of the records the mock service currently holds
    #[must_use]
    pub fn records(&self) -> Vec<TodoRecord> {
        self.records.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<()> {
        match self.fail_with.lock().unwrap().as_ref() {
            Some(message) => Err(ApiError::RequestFailed(message.clone())),
            None => Ok(()),
        }
    }
}

// Mutex poison is unrecoverable in a test double.
#[allow(clippy::unwrap_used)]
impl TodoApi for MockTodoApi {
    async fn fetch_todos(&self) -> Result<Vec<TodoRecord>> {
        self.check_failure()?;
        Ok(self.records.lock().unwrap().clone())
    }

    async fn create_todo(&self, todo: &TodoRecord) -> Result<TodoRecord> {
        self.check_failure()?;
        self.records.lock().unwrap().push(todo.clone());
        Ok(todo.clone())
    }

    async fn update_todo(&self, todo: &TodoRecord) -> Result<TodoRecord> {
        self.check_failure()?;
        let mut records = self.records.lock().unwrap();
        if let Some(existing) = records.iter_mut().find(|r| r.id == todo.id) {
            *existing = todo.clone();
        }
        Ok(todo.clone())
    }

    async fn set_completed(&self, id: TodoId, completed: bool) -> Result<CompletedPatch> {
        self.check_failure()?;
        let mut records = self.records.lock().unwrap();
        if let Some(existing) = records.iter_mut().find(|r| r.id == id) {
            existing.completed = completed;
        }
        Ok(CompletedPatch { id, completed })
    }

    async fn delete_todo(&self, id: TodoId) -> Result<()> {
        self.check_failure()?;
        self.records.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;

    fn record(id: u64) -> TodoRecord {
        TodoRecord::new(TodoId::new(id), UserId::new(1), format!("todo {id}"))
    }

    #[tokio::test]
    async fn echoes_created_records() {
        let api = MockTodoApi::new(vec![]);
        let created = api.create_todo(&record(1)).await;

        assert_eq!(created.ok(), Some(record(1)));
        assert_eq!(api.records().len(), 1);
    }

    #[tokio::test]
    async fn fail_switch_rejects_every_call() {
        let api = MockTodoApi::new(vec![record(1)]);
        api.fail_with("Network Error");

        let fetched = api.fetch_todos().await;
        assert!(matches!(fetched, Err(ApiError::RequestFailed(ref m)) if m == "Network Error"));

        api.recover();
        assert!(api.fetch_todos().await.is_ok());
    }

    #[tokio::test]
    async fn set_completed_returns_patch_keyed_on_id() {
        let api = MockTodoApi::new(vec![record(1)]);
        let patch = api.set_completed(TodoId::new(1), true).await;

        assert_eq!(
            patch.ok(),
            Some(CompletedPatch {
                id: TodoId::new(1),
                completed: true
            })
        );
    }
}
