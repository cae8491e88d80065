//! HTTP backend abstraction for the page loader.
//!
//! The loader talks to the list endpoint through [`HttpBackend`] so that
//! decoding and error mapping can be exercised without a socket. The
//! production implementation uses reqwest and performs exactly one request
//! per call, with no retry.

use async_trait::async_trait;
use url::Url;

use crate::config::TodoClientConfig;
use crate::error::{LoadError, LoadResult};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch a response body.
///
/// This is an implementation detail - external code should use
/// `DefaultTodoLoader` or the `TodoFeedPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Issue a `GET` and return the full body of a successful response.
    ///
    /// Non-success statuses are reported as [`LoadError::Status`].
    async fn get_body(&self, url: &Url) -> LoadResult<Vec<u8>>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &TodoClientConfig) -> LoadResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(LoadError::ClientBuild)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_body(&self, url: &Url) -> LoadResult<Vec<u8>> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
