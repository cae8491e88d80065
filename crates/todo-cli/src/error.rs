//! CLI-specific error types and mappings.
//!
//! Maps domain errors to exit codes and user-facing messages.

use thiserror::Error;
use todo_core::FeedError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error (bad URL, bad database location).
    #[error("Configuration error: {0}")]
    Config(String),

    /// A remote service could not be reached or refused the request.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// A remote service answered with unusable data.
    #[error("Invalid data: {0}")]
    Data(String),

    /// IO error (writing output).
    #[error("IO error: {0}")]
    Io(String),

    /// The server stopped with an error.
    #[error("Server error: {0}")]
    Server(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 1: General error
    /// - 65: Data format error
    /// - 69: Service unavailable
    /// - 74: IO error
    /// - 78: Configuration error
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Data(_) => 65,        // EX_DATAERR
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Io(_) => 74,          // EX_IOERR
            Self::Config(_) => 78,      // EX_CONFIG
            Self::Server(_) => 1,
        }
    }
}

impl From<FeedError> for CliError {
    fn from(err: FeedError) -> Self {
        match err {
            FeedError::Unreachable { .. } | FeedError::Status { .. } => {
                Self::Unavailable(err.to_string())
            }
            FeedError::MalformedBody { .. } | FeedError::Decode { .. } => {
                Self::Data(err.to_string())
            }
            FeedError::Configuration { message } => Self::Config(message),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_error_exit_codes() {
        let unreachable: CliError = FeedError::Unreachable {
            message: "connection refused".to_string(),
        }
        .into();
        assert_eq!(unreachable.exit_code(), 69);

        let status: CliError = FeedError::Status {
            status: 500,
            url: "http://127.0.0.1:8000/".to_string(),
        }
        .into();
        assert_eq!(status.exit_code(), 69);
        assert!(status.to_string().contains("500"));

        let decode: CliError = FeedError::Decode {
            message: "missing field `done`".to_string(),
        }
        .into();
        assert_eq!(decode.exit_code(), 65);

        let config: CliError = FeedError::Configuration {
            message: "relative URL without a base".to_string(),
        }
        .into();
        assert_eq!(config.exit_code(), 78);
    }
}
