//! Composition utilities for wiring `SQLite` repositories.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use todo_core::Repos;

use crate::repositories::SqliteTodoRepository;

/// Build all `SQLite` repositories from a pool.
///
/// This is the recommended way for adapters to obtain repositories.
pub fn build_repos(pool: SqlitePool) -> Repos {
    Repos::new(Arc::new(SqliteTodoRepository::new(pool)))
}
