//! Todo client actions.
//!
//! This module defines all possible inputs to the todo reducer:
//! - **Intents**: user requests that start an operation (`FetchTodos`,
//!   `CreateTodo`, ...). Reducing an intent flips the pending flags and
//!   describes the network call as an effect.
//! - **Outcomes**: the single fulfilled or rejected completion delivered
//!   by each operation's effect. Reducing an outcome applies the pure
//!   reconciliation step to the collection.
//!
//! Every operation resolves to exactly one outcome; a rejected outcome
//! records the failure message and leaves the collection untouched.

use crate::types::{TodoId, TodoRecord, UserId};
use serde::{Deserialize, Serialize};
use todo_sync_macros::Action;

/// Todo client action.
///
/// Actions are the only way to communicate with the todo store. The
/// reducer is a pure function: `(State, Action, Env) → (State, Effects)`.
#[derive(Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TodoAction {
    // ========== Intents ==========
    /// Intent: Replace the collection with the server's current list
    #[intent]
    FetchTodos,

    /// Intent: Create a new todo for a user
    ///
    /// The reducer assigns the id and sends the record not-yet-completed.
    #[intent]
    CreateTodo {
        /// Owning user
        user_id: UserId,
        /// Title of the new todo
        title: String,
    },

    /// Intent: Replace a record wholesale, keyed by id
    #[intent]
    UpdateTodo {
        /// Record to replace
        id: TodoId,
        /// Owning user
        user_id: UserId,
        /// New title
        title: String,
        /// Completion value to keep
        completed: bool,
    },

    /// Intent: Delete a record by id
    #[intent]
    DeleteTodo {
        /// Record to delete
        id: TodoId,
    },

    /// Intent: Flip a record's completion flag
    ///
    /// Carries the record's *current* value; the inverse is sent to the
    /// server.
    #[intent]
    ToggleCompleted {
        /// Record to toggle
        id: TodoId,
        /// The record's current completion value
        completed: bool,
    },

    /// Intent: Select (or clear) the user filter
    ///
    /// Synchronous; no network call.
    #[intent]
    SelectUser {
        /// User to filter by, or `None` to clear the selection
        user_id: Option<UserId>,
    },

    // ========== Outcomes ==========
    /// Outcome: Fetch fulfilled with the server's full list
    #[outcome]
    TodosFetched {
        /// The authoritative list; replaces the collection wholesale
        todos: Vec<TodoRecord>,
    },

    /// Outcome: Fetch rejected
    #[outcome]
    FetchFailed {
        /// Failure message
        error: String,
    },

    /// Outcome: Create fulfilled with the server's echoed record
    #[outcome]
    TodoCreated {
        /// The record as the server returned it; appended as-is
        todo: TodoRecord,
    },

    /// Outcome: Create rejected
    #[outcome]
    CreateFailed {
        /// Failure message
        error: String,
    },

    /// Outcome: Update fulfilled with the server's returned record
    #[outcome]
    TodoUpdated {
        /// The record replacing the matching entry wholesale
        todo: TodoRecord,
    },

    /// Outcome: Update rejected
    #[outcome]
    UpdateFailed {
        /// Failure message
        error: String,
    },

    /// Outcome: Delete fulfilled
    ///
    /// Carries the id the client sent; the service returns no meaningful
    /// body for deletes.
    #[outcome]
    TodoDeleted {
        /// The deleted record's id
        id: TodoId,
    },

    /// Outcome: Delete rejected
    #[outcome]
    DeleteFailed {
        /// Failure message
        error: String,
    },

    /// Outcome: Toggle fulfilled with the server-held completion value
    ///
    /// Only the `completed` field is merged into the matching record;
    /// title and owner are untouched.
    #[outcome]
    CompletedToggled {
        /// Id echoed by the server
        id: TodoId,
        /// The completion value now held by the server
        completed: bool,
    },

    /// Outcome: Toggle rejected
    #[outcome]
    ToggleFailed {
        /// Failure message
        error: String,
    },
}
