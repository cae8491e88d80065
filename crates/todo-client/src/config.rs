//! Public configuration for the page loader.

use std::time::Duration;

/// Endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://0.0.0.0:8000";

/// Configuration for the todo page loader.
///
/// Use the builder pattern methods to customize the loader.
///
/// # Example
///
/// ```
/// use todo_client::TodoClientConfig;
/// use std::time::Duration;
///
/// let config = TodoClientConfig::new()
///     .with_base_url("http://127.0.0.1:8000")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct TodoClientConfig {
    /// Address of the list endpoint
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout; `None` waits for the server indefinitely
    pub(crate) timeout: Option<Duration>,
}

impl Default for TodoClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("todo-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl TodoClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list endpoint.
    ///
    /// Defaults to `http://0.0.0.0:8000`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Bound each request by a timeout.
    ///
    /// No timeout is applied unless one is set.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set or clear the request timeout.
    #[must_use]
    pub const fn with_optional_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured endpoint, as given.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
