//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No `reqwest` types in any signature
//! - Traits are minimal and CRUD-focused for repositories

pub mod todo_feed;
pub mod todo_repository;

use std::sync::Arc;
use thiserror::Error;

pub use todo_feed::{FeedError, FeedResult, TodoFeedPort};
pub use todo_repository::TodoRepository;

#[cfg(test)]
pub use todo_repository::MockTodoRepository;

/// Container for all repository trait objects.
///
/// Lets adapters wire repositories without depending on the concrete
/// storage crate.
#[derive(Clone)]
pub struct Repos {
    /// Todo repository for CRUD operations on todos.
    pub todos: Arc<dyn TodoRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., NOT NULL).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
