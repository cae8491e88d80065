//! Port trait implementation for `TodoLoader`.
//!
//! Implements the core-owned `TodoFeedPort` trait, mapping loader errors to
//! the domain-level `FeedError`.

use async_trait::async_trait;
use todo_core::{FeedError, FeedResult, TodoFeedPort, TodoPage};

use crate::error::LoadError;
use crate::http::HttpBackend;
use crate::loader::TodoLoader;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `LoadError` to core `FeedError`.
fn map_error(err: LoadError) -> FeedError {
    match err {
        LoadError::Network(e) => FeedError::Unreachable {
            message: e.to_string(),
        },
        LoadError::Status { status, url } => FeedError::Status { status, url },
        LoadError::MalformedBody(e) => FeedError::MalformedBody {
            message: e.to_string(),
        },
        LoadError::Decode(e) => FeedError::Decode {
            message: e.to_string(),
        },
        LoadError::InvalidUrl(e) => FeedError::Configuration {
            message: e.to_string(),
        },
        LoadError::ClientBuild(e) => FeedError::Configuration {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> TodoFeedPort for TodoLoader<B> {
    async fn load_page(&self) -> FeedResult<TodoPage> {
        self.load().await.map_err(map_error)
    }
}
