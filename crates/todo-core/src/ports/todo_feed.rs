//! Port for loading the todo page from a remote list endpoint.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::TodoPage;

/// Errors from page loads.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The endpoint could not be reached or the connection broke.
    #[error("Todo endpoint unreachable: {message}")]
    Unreachable {
        /// Description of the network error
        message: String,
    },

    /// The endpoint answered with a non-success status.
    #[error("Todo endpoint returned status {status}: {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The response body was not valid JSON.
    #[error("Malformed response body: {message}")]
    MalformedBody {
        /// Parser diagnostic
        message: String,
    },

    /// The body was valid JSON but not a list of todos.
    #[error("Response does not match the todo list shape: {message}")]
    Decode {
        /// Decoder diagnostic
        message: String,
    },

    /// The loader was configured with an unusable endpoint.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for page loads.
pub type FeedResult<T> = Result<T, FeedError>;

/// Source of the todo list page data.
///
/// Every call performs a fresh load; implementations must not cache.
#[async_trait]
pub trait TodoFeedPort: Send + Sync {
    /// Fetch and decode the current todo list.
    async fn load_page(&self) -> FeedResult<TodoPage>;
}
