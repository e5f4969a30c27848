//! Todo client environment.
//!
//! This module defines the environment type for dependency injection in
//! the todo reducer.

use crate::providers::TodoApi;
use std::sync::Arc;
use todo_sync_core::environment::Clock;

/// Todo client environment.
///
/// Contains the external dependencies the reducer needs: the remote todo
/// service and a clock for the sync timestamp.
///
/// # Type Parameters
///
/// - `A`: Remote todo service provider
#[derive(Clone)]
pub struct TodoEnvironment<A>
where
    A: TodoApi + Clone,
{
    /// Remote todo service.
    pub api: A,

    /// Clock for sync timestamps.
    pub clock: Arc<dyn Clock>,
}

impl<A> TodoEnvironment<A>
where
    A: TodoApi + Clone,
{
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(api: A, clock: Arc<dyn Clock>) -> Self {
        Self { api, clock }
    }
}
