//! Application services.
//!
//! Services orchestrate domain operations using injected ports.

mod todo_service;

pub use todo_service::TodoService;
