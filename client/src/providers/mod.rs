//! Remote todo service provider.
//!
//! The service is an external collaborator, not owned by this system; it
//! is abstracted behind the [`TodoApi`] trait so reducers stay pure and
//! tests run against an in-memory implementation.

use crate::error::Result;
use crate::types::{CompletedPatch, TodoId, TodoRecord};

mod http;

pub use http::HttpTodoApi;

/// Remote todo service.
///
/// One method per remote operation. Every call resolves exactly once, to
/// either the parsed response or an [`crate::error::ApiError`]; the caller
/// maps that single completion into a fulfilled or rejected outcome action.
pub trait TodoApi: Send + Sync {
    /// Fetch the full todo collection.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    fn fetch_todos(&self) -> impl std::future::Future<Output = Result<Vec<TodoRecord>>> + Send;

    /// Create a todo record.
    ///
    /// The full record (including the client-assigned id) is sent; the
    /// echoed response is treated as the authoritative record.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    fn create_todo(
        &self,
        todo: &TodoRecord,
    ) -> impl std::future::Future<Output = Result<TodoRecord>> + Send;

    /// Replace a todo record wholesale, keyed by its id.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    fn update_todo(
        &self,
        todo: &TodoRecord,
    ) -> impl std::future::Future<Output = Result<TodoRecord>> + Send;

    /// Set only the completion flag of a record.
    ///
    /// Sends a partial body `{"completed": bool}`; the response carries the
    /// record id, which reconciliation keys on.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    fn set_completed(
        &self,
        id: TodoId,
        completed: bool,
    ) -> impl std::future::Future<Output = Result<CompletedPatch>> + Send;

    /// Delete a record by id.
    ///
    /// The response body carries nothing meaningful; success is the
    /// confirmation and removal keys on the id the client sent.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    fn delete_todo(&self, id: TodoId) -> impl std::future::Future<Output = Result<()>> + Send;
}
