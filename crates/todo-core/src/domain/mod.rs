//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `todo` - Todo item types (`Todo`, `NewTodo`, `TodoUpdate`)
//! - `page` - Page data consumed by the rendering layer

mod page;
mod todo;

pub use page::{PageData, TodoPage};
pub use todo::{NewTodo, Todo, TodoUpdate};
