//! Todo service - orchestrates todo CRUD operations.

use std::sync::Arc;

use crate::domain::{NewTodo, Todo, TodoUpdate};
use crate::ports::{CoreError, Repos, TodoRepository};

/// Service for todo operations.
///
/// Thin facade over the injected `TodoRepository` that validates input
/// before it reaches storage.
#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    /// Create a new todo service with the given repository.
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    /// Create a service from a repository container.
    pub fn from_repos(repos: &Repos) -> Self {
        Self::new(Arc::clone(&repos.todos))
    }

    /// List all todos ordered by ID.
    pub async fn list(&self) -> Result<Vec<Todo>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Get a todo by ID.
    pub async fn get(&self, id: i64) -> Result<Todo, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Add a new todo.
    pub async fn create(&self, todo: NewTodo) -> Result<Todo, CoreError> {
        todo.validate()?;
        let created = self.repo.insert(&todo).await?;
        tracing::debug!(id = created.id, "todo created");
        Ok(created)
    }

    /// Replace description and done flag of an existing todo.
    pub async fn update(&self, update: TodoUpdate) -> Result<(), CoreError> {
        update.validate()?;
        let id = update.id;
        self.repo.update(&update.into()).await?;
        tracing::debug!(id, "todo updated");
        Ok(())
    }

    /// Delete a todo by ID.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete(id).await?;
        tracing::debug!(id, "todo deleted");
        Ok(())
    }
}
