//! `SQLite` storage for todolist.
//!
//! Provides database setup and the `sqlx`-backed implementation of the
//! `TodoRepository` port. Nothing outside this crate sees a `SqlitePool`
//! except the composition roots that call [`setup_database`].

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Bundled SQLite is linked through sqlx; the direct dependency pins the features.
use libsqlite3_sys as _;

pub use factory::build_repos;
pub use repositories::SqliteTodoRepository;

pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
