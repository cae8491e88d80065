//! Todo repository trait definition.
//!
//! This port defines the interface for todo persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewTodo, Todo};

/// Repository for todo persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD-only: list, get, insert, update, delete
/// - Input validation belongs in `TodoService`, not here
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// List all todos ordered by ID.
    async fn list(&self) -> Result<Vec<Todo>, RepositoryError>;

    /// Get a todo by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the todo doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Todo, RepositoryError>;

    /// Insert a new todo.
    ///
    /// Returns the persisted todo with its assigned ID.
    async fn insert(&self, todo: &NewTodo) -> Result<Todo, RepositoryError>;

    /// Overwrite description and done flag of an existing todo.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the todo doesn't exist.
    async fn update(&self, todo: &Todo) -> Result<(), RepositoryError>;

    /// Delete a todo by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the todo doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
