//! Core domain types and port definitions for todolist.
//!
//! This crate owns the `Todo` model, the page data handed to the rendering
//! layer, and the traits that storage and HTTP adapters implement. It has
//! no knowledge of `sqlx`, `reqwest` or `axum`.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{NewTodo, PageData, Todo, TodoPage, TodoUpdate};
pub use ports::{
    CoreError, FeedError, FeedResult, Repos, RepositoryError, TodoFeedPort, TodoRepository,
};
pub use services::TodoService;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio as _;
