//! Error types for page loads.
//!
//! These errors are mapped to the core `FeedError` at the port boundary.

use thiserror::Error;

/// Result type alias for page loads.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can end a page load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Connecting, sending or reading the body failed.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Todo endpoint returned status {status}: {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The body is not syntactically valid JSON.
    #[error("Malformed JSON body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    /// The body is valid JSON but not a list of the expected items.
    #[error("Unexpected payload shape: {0}")]
    Decode(#[source] serde_json::Error),

    /// The configured base URL does not parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl LoadError {
    /// Whether the request never produced a response.
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Whether a response arrived but its body could not be used.
    pub const fn is_payload(&self) -> bool {
        matches!(self, Self::MalformedBody(_) | Self::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let error = LoadError::Status {
            status: 404,
            url: "http://127.0.0.1:8000/".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("127.0.0.1:8000"));
        assert!(!error.is_network());
        assert!(!error.is_payload());
    }

    #[test]
    fn test_payload_errors() {
        let syntax = serde_json::from_str::<serde_json::Value>("oops").unwrap_err();
        let error = LoadError::MalformedBody(syntax);
        assert!(error.is_payload());
        assert!(error.to_string().starts_with("Malformed JSON body"));
    }

    #[test]
    fn test_invalid_url_error() {
        let parse = url::Url::parse("not a url").unwrap_err();
        let error: LoadError = parse.into();
        assert!(matches!(error, LoadError::InvalidUrl(_)));
    }
}
