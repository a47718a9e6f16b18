//! Error handling module for bedtime-stories
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Composing a story never fails; these errors come from the edges (prompts,
//! JSON output, profile and template validation).

use thiserror::Error;

/// Main error type for bedtime-stories
#[derive(Error, Debug)]
pub enum StoryError {
    /// IO errors (prompts)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation errors (profile values, template banks)
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for bedtime-stories operations
pub type Result<T> = std::result::Result<T, StoryError>;

impl StoryError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoryError::validation("name is blank");
        assert_eq!(err.to_string(), "Validation error: name is blank");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: StoryError = io_err.into();
        assert!(matches!(err, StoryError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StoryError = json_err.into();
        assert!(matches!(err, StoryError::Json(_)));
    }
}
