//! Client state types.
//!
//! The state mirrors the server-held todo collection locally, together
//! with the request-status flags and the user filter. All types are
//! `Clone` to support the functional architecture pattern.

use crate::types::{TodoId, TodoRecord, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// In-memory mirror of the remote todo collection
///
/// Insertion order is arrival order from the last fetch; creates append
/// and updates/deletes apply in place by id lookup.
///
/// The status flags are shared across all five operation kinds: `loading`
/// is OR'd across every in-flight request, and `error` holds only the most
/// recent failure message, which may mask an earlier one. The view never
/// needs to distinguish which operation is in flight, so a single pair of
/// flags satisfies the observable contract.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TodoListState {
    /// All todos, in collection order
    pub todos: Vec<TodoRecord>,
    /// True while any request is in flight
    pub loading: bool,
    /// Most recent failure message (if any)
    pub error: Option<String>,
    /// When the collection was last replaced by a full fetch
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl TodoListState {
    /// Creates a new empty list state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            loading: false,
            error: None,
            last_synced_at: None,
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoRecord> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Returns the collection position of a todo by id
    #[must_use]
    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn exists(&self, id: TodoId) -> bool {
        self.position(id).is_some()
    }

    /// Returns the id to assign to the next created record
    ///
    /// One above the highest live id, so an id freed by a delete is never
    /// handed out again while a higher id is still live. (`len + 1` would
    /// collide with an existing id after deletes shrink the collection.)
    #[must_use]
    pub fn next_id(&self) -> TodoId {
        TodoId::new(self.todos.iter().map(|t| t.id.get()).max().unwrap_or(0) + 1)
    }

    /// Returns the distinct user ids present in the collection
    ///
    /// De-duplicated, preserving first-seen order.
    #[must_use]
    pub fn unique_users(&self) -> Vec<UserId> {
        let mut seen: Vec<UserId> = Vec::new();
        for todo in &self.todos {
            if !seen.contains(&todo.user_id) {
                seen.push(todo.user_id);
            }
        }
        seen
    }
}

/// The currently selected user filter
///
/// Defaults to no selection, which yields an empty filtered view (not the
/// full list). An arbitrary, even stale, id may be selected without error;
/// it simply yields an empty view. Data changes never clear the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// The selected user, if any
    pub selected_user: Option<UserId>,
}

/// Complete client state: the todo mirror plus the user filter
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    /// The synchronized todo collection and request-status flags
    pub list: TodoListState,
    /// The user filter
    pub filter: FilterState,
}

impl AppState {
    /// Creates a fresh state: empty collection, unselected user, idle status
    #[must_use]
    pub const fn new() -> Self {
        Self {
            list: TodoListState::new(),
            filter: FilterState {
                selected_user: None,
            },
        }
    }

    /// Returns the todos visible under the current filter, in collection order
    ///
    /// Empty when no user is selected.
    #[must_use]
    pub fn filtered(&self) -> Vec<&TodoRecord> {
        match self.filter.selected_user {
            Some(user) => self
                .list
                .todos
                .iter()
                .filter(|t| t.user_id == user)
                .collect(),
            None => Vec::new(),
        }
    }
}
