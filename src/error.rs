//! Error types for post generation and the completion service boundary.

use thiserror::Error;

/// Result type alias for postcraft operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for content generation
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied unusable input (empty topic, invalid catalog, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Lookup miss surfaced as an error (store lookups themselves return Option)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Operation not allowed in the post's current lifecycle state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Text-completion service failure
    #[error("Completion service error: {0}")]
    Completion(String),

    /// Text-completion call exceeded its deadline
    #[error("Completion timed out after {0}s")]
    Timeout(u64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error came from the completion service boundary.
    ///
    /// These are always recovered locally by falling back to templates.
    pub fn is_completion_failure(&self) -> bool {
        matches!(
            self,
            Error::Completion(_) | Error::Timeout(_) | Error::Network(_) | Error::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("topic must not be empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: topic must not be empty");

        let err = Error::Timeout(10);
        assert_eq!(err.to_string(), "Completion timed out after 10s");
    }

    #[test]
    fn test_completion_failure_classification() {
        assert!(Error::Completion("502".to_string()).is_completion_failure());
        assert!(Error::Timeout(5).is_completion_failure());
        assert!(!Error::InvalidInput("x".to_string()).is_completion_failure());
        assert!(!Error::InvalidState("published".to_string()).is_completion_failure());
    }
}
