//! Axum HTTP backend serving the todo list.
//!
//! Exposes the list endpoint consumed by the page loader together with the
//! form-driven create, update and delete routes.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{
    AxumContext, CorsConfig, DEFAULT_FRONTEND_URL, DEFAULT_PORT, ServerConfig, bootstrap,
    start_server,
};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
