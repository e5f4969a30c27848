//! Reducer logic for the todo client.
//!
//! Each remote operation is an intent whose reduction flips the pending
//! flags and describes the network call as a single `Effect::Future`. The
//! effect resolves exactly once, to a fulfilled or rejected outcome, and
//! reducing that outcome applies the pure reconciliation step to the
//! collection. Rejected outcomes record the failure message and leave the
//! collection untouched - nothing was optimistically applied, so there is
//! nothing to roll back.

use crate::actions::TodoAction;
use crate::environment::TodoEnvironment;
use crate::providers::TodoApi;
use crate::state::AppState;
use crate::types::TodoRecord;
use todo_sync_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Reducer for the todo client
#[derive(Clone, Debug)]
pub struct TodoReducer<A> {
    /// Phantom data to hold the provider type parameter.
    _phantom: std::marker::PhantomData<A>,
}

impl<A> TodoReducer<A> {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<A> Default for TodoReducer<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Reducer for TodoReducer<A>
where
    A: TodoApi + Clone + 'static,
{
    type State = AppState;
    type Action = TodoAction;
    type Environment = TodoEnvironment<A>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Intents ==========
            TodoAction::FetchTodos => {
                state.list.loading = true;
                state.list.error = None;

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.fetch_todos().await {
                        Ok(todos) => Some(TodoAction::TodosFetched { todos }),
                        Err(e) => Some(TodoAction::FetchFailed {
                            error: e.to_string(),
                        }),
                    }
                }))]
            }

            TodoAction::CreateTodo { user_id, title } => {
                state.list.loading = true;
                state.list.error = None;

                // Assign the id before sending; the echoed response is
                // authoritative.
                let record = TodoRecord::new(state.list.next_id(), user_id, title);

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.create_todo(&record).await {
                        Ok(todo) => Some(TodoAction::TodoCreated { todo }),
                        Err(e) => Some(TodoAction::CreateFailed {
                            error: e.to_string(),
                        }),
                    }
                }))]
            }

            TodoAction::UpdateTodo {
                id,
                user_id,
                title,
                completed,
            } => {
                state.list.loading = true;

                let record = TodoRecord {
                    id,
                    user_id,
                    title,
                    completed,
                };

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.update_todo(&record).await {
                        Ok(todo) => Some(TodoAction::TodoUpdated { todo }),
                        Err(e) => Some(TodoAction::UpdateFailed {
                            error: e.to_string(),
                        }),
                    }
                }))]
            }

            TodoAction::DeleteTodo { id } => {
                state.list.loading = true;

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.delete_todo(id).await {
                        // No meaningful response body; remove by the id
                        // the client sent.
                        Ok(()) => Some(TodoAction::TodoDeleted { id }),
                        Err(e) => Some(TodoAction::DeleteFailed {
                            error: e.to_string(),
                        }),
                    }
                }))]
            }

            TodoAction::ToggleCompleted { id, completed } => {
                state.list.loading = true;

                // The action carries the current value; the inverse is the
                // desired one.
                let desired = !completed;

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.set_completed(id, desired).await {
                        Ok(patch) => Some(TodoAction::CompletedToggled {
                            id: patch.id,
                            completed: patch.completed,
                        }),
                        Err(e) => Some(TodoAction::ToggleFailed {
                            error: e.to_string(),
                        }),
                    }
                }))]
            }

            TodoAction::SelectUser { user_id } => {
                state.filter.selected_user = user_id;
                smallvec![Effect::None]
            }

            // ========== Fulfilled outcomes ==========
            TodoAction::TodosFetched { todos } => {
                // Full replace, not a merge.
                state.list.todos = todos;
                state.list.loading = false;
                state.list.last_synced_at = Some(env.clock.now());
                smallvec![Effect::None]
            }

            TodoAction::TodoCreated { todo } => {
                state.list.todos.push(todo);
                state.list.loading = false;
                smallvec![Effect::None]
            }

            TodoAction::TodoUpdated { todo } => {
                if let Some(index) = state.list.position(todo.id) {
                    state.list.todos[index] = todo;
                }
                state.list.loading = false;
                smallvec![Effect::None]
            }

            TodoAction::TodoDeleted { id } => {
                state.list.todos.retain(|t| t.id != id);
                state.list.loading = false;
                smallvec![Effect::None]
            }

            TodoAction::CompletedToggled { id, completed } => {
                // Merge only the completion flag; title and owner are
                // untouched. No-op if the record is gone.
                if let Some(index) = state.list.position(id) {
                    state.list.todos[index].completed = completed;
                }
                state.list.loading = false;
                smallvec![Effect::None]
            }

            // ========== Rejected outcomes ==========
            TodoAction::FetchFailed { error }
            | TodoAction::CreateFailed { error }
            | TodoAction::UpdateFailed { error }
            | TodoAction::DeleteFailed { error }
            | TodoAction::ToggleFailed { error } => {
                tracing::warn!(%error, "Operation rejected");
                state.list.error = Some(error);
                state.list.loading = false;
                smallvec![Effect::None]
            }
        }
    }
}
