//! CLI error type.

use adapter_feeds::FeedError;
use rates_core::types::DateError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Feed retrieval or parsing failed
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// A date argument could not be parsed
    #[error("{0}")]
    Date(#[from] DateError),

    /// Invalid command argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output failed
    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_error_converts() {
        let err: CliError = FeedError::NoEntries { months_tried: 2 }.into();
        assert!(matches!(err, CliError::Feed(_)));
        assert!(err.to_string().starts_with("Feed error"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("face value must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid argument: face value must be positive");
    }
}
