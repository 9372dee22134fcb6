//! Error types for the `spinbox` application
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! The value controller itself is infallible; errors only arise from the
//! ambient layers (configuration persistence, logging, UI platform).

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the `spinbox` application
#[derive(Debug, Error)]
pub enum SpinboxError {
    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UI platform error
    #[error("UI platform error: {0}")]
    Ui(#[from] slint::PlatformError),
}

/// Result type alias for `spinbox` operations
pub type Result<T> = std::result::Result<T, SpinboxError>;

/// Convert an error to a user-friendly message
///
/// This function takes a `SpinboxError` and returns a message suitable
/// for displaying to end users when startup fails.
pub fn get_user_friendly_error(error: &SpinboxError) -> String {
    match error {
        SpinboxError::Config(_) => "Failed to load or save configuration.\n\n\
             Your settings may not persist.\n\
             Check that you have write permissions to the configuration directory."
            .to_string(),
        SpinboxError::Io(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        SpinboxError::Json(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
        SpinboxError::Ui(e) => {
            format!(
                "The user interface could not be started:\n\n{e}\n\n\
                 Please check your display environment."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = SpinboxError::Config(StringError::new("bad path"));
        assert_eq!(error.to_string(), "Configuration error: bad path");
    }

    #[test]
    fn test_user_friendly_messages() {
        let error = SpinboxError::Config(StringError::new("bad path"));
        let message = get_user_friendly_error(&error);
        assert!(message.contains("Failed to load or save configuration"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: SpinboxError = io_error.into();
        assert!(matches!(error, SpinboxError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: SpinboxError = json_error.into();
        assert!(matches!(error, SpinboxError::Json(_)));
        let message = get_user_friendly_error(&error);
        assert!(message.contains("corrupted"));
    }
}
