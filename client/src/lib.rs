//! Todo client: a store-driven mirror of a remote todo collection.
//!
//! The client keeps an in-memory copy of the server's todo collection and
//! reconciles it through a unidirectional action loop: user commands become
//! intent actions, each intent describes one network call as an effect, and
//! the call's single resolution comes back as a fulfilled or rejected
//! outcome action that the reducer applies purely.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use todo_client::{
//!     ClientConfig, HttpTodoApi, TodoAction, TodoEnvironment, TodoReducer,
//! };
//! use todo_client::state::AppState;
//! use todo_sync_core::environment::SystemClock;
//! use todo_sync_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env();
//! let env = TodoEnvironment::new(HttpTodoApi::new(&config), Arc::new(SystemClock));
//! let store = Store::new(AppState::new(), TodoReducer::new(), env);
//!
//! // Pull the collection, then filter to one user.
//! store.send(TodoAction::FetchTodos).await?.wait().await;
//! store
//!     .send(TodoAction::SelectUser {
//!         user_id: Some(todo_client::UserId::new(1)),
//!     })
//!     .await?;
//!
//! let visible = store.state(|s| s.filtered().len()).await;
//! println!("visible todos: {visible}");
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod config;
pub mod environment;
pub mod error;
pub mod mocks;
pub mod providers;
pub mod reducer;
pub mod state;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use actions::TodoAction;
pub use config::ClientConfig;
pub use environment::TodoEnvironment;
pub use error::{ApiError, Result};
pub use mocks::MockTodoApi;
pub use providers::{HttpTodoApi, TodoApi};
pub use reducer::TodoReducer;
pub use state::{AppState, FilterState, TodoListState};
pub use types::{CompletedPatch, TodoId, TodoRecord, UserId};
