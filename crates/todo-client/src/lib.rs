//! Page loader for the todo list.
//!
//! A loader issues one `GET` against the configured list endpoint, decodes
//! the body as a JSON array of items and returns it as page data under the
//! `todos` field. Every call performs a fresh request.
//!
//! ```no_run
//! use todo_client::{DefaultTodoLoader, TodoClientConfig};
//!
//! # async fn example() -> Result<(), todo_client::LoadError> {
//! let loader = DefaultTodoLoader::new(
//!     &TodoClientConfig::new().with_base_url("http://127.0.0.1:8000"),
//! )?;
//! let page = loader.load().await?;
//! println!("{} todos", page.todos.len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultTodoLoader is meant to be used
// directly or through the TodoFeedPort trait, not its internal generic structure
#![allow(private_interfaces)]

mod config;
mod decode;
mod error;
mod http;
mod loader;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Loader
pub use loader::DefaultTodoLoader;

// Configuration
pub use config::{DEFAULT_BASE_URL, TodoClientConfig};

// Errors
pub use error::{LoadError, LoadResult};

// Silence unused dev-dependency warnings
#[cfg(test)]
use wiremock as _;
