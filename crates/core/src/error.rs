//! Error types for Logo Forge
//!
//! This module provides unified error handling for the form, the generation
//! client and the desktop shell. Every generation failure collapses into the
//! same user-facing message; the variants exist for logging.

use std::path::PathBuf;
use thiserror::Error;

/// Message shown in the form for any failed generation
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate logo. Please try again.";

/// The main error type for Logo Forge
#[derive(Debug, Error)]
pub enum ForgeError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Prompt is empty or whitespace only
    #[error("Prompt is required")]
    EmptyPrompt,

    /// Color is not a `#rrggbb` hex string
    #[error("Invalid color '{0}': expected a hex value like #3B82F6")]
    InvalidColor(String),

    /// Style is not one of the supported options
    #[error("Unknown style '{0}': expected minimalist, vintage, modern or hand-drawn")]
    UnknownStyle(String),

    // ========================================================================
    // Generation Errors
    // ========================================================================
    /// Request could not be sent or the response could not be read
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Endpoint answered with a non-success status
    #[error("Generation endpoint returned HTTP {0}")]
    Status(u16),

    /// Success status but the body was not `{"imageUrl": ...}`
    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),

    // ========================================================================
    // Download Errors
    // ========================================================================
    /// Image URL could not be resolved or decoded
    #[error("Invalid image URL '{url}': {message}")]
    InvalidImageUrl { url: String, message: String },

    /// Image bytes could not be fetched
    #[error("Download failed: {0}")]
    Download(String),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// Config file could not be parsed
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Operation cancelled by user
    #[error("Operation cancelled")]
    Cancelled,

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl ForgeError {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        ForgeError::Transport(msg.into())
    }

    /// Create a malformed response error
    pub fn malformed(msg: impl Into<String>) -> Self {
        ForgeError::MalformedResponse(msg.into())
    }

    /// Create an invalid image URL error
    pub fn invalid_image_url(url: impl Into<String>, msg: impl Into<String>) -> Self {
        ForgeError::InvalidImageUrl {
            url: url.into(),
            message: msg.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        ForgeError::InvalidConfig(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        ForgeError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        ForgeError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ForgeError::EmptyPrompt | ForgeError::InvalidColor(_) | ForgeError::UnknownStyle(_)
        )
    }

    /// Check if this error came from a generation request
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            ForgeError::Transport(_)
                | ForgeError::Timeout
                | ForgeError::Status(_)
                | ForgeError::MalformedResponse(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, ForgeError::Io(_) | ForgeError::FileWrite { .. })
    }

    /// Text suitable for showing to the user.
    ///
    /// Generation failures never leak detail: they all map to
    /// [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        if self.is_generation_failure() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

/// Result type alias using ForgeError
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> ForgeResult<T>;
}

impl<T, E: Into<ForgeError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> ForgeResult<T> {
        self.map_err(|e| {
            let err: ForgeError = e.into();
            ForgeError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_errors() {
        assert!(ForgeError::EmptyPrompt.is_validation());
        assert!(ForgeError::InvalidColor("red".into()).is_validation());
        assert!(!ForgeError::EmptyPrompt.is_generation_failure());
        assert_eq!(ForgeError::EmptyPrompt.to_string(), "Prompt is required");
    }

    #[test]
    fn test_generation_failures_share_user_message() {
        let failures = [
            ForgeError::transport("connection refused"),
            ForgeError::Timeout,
            ForgeError::Status(500),
            ForgeError::Status(404),
            ForgeError::malformed("missing field `imageUrl`"),
        ];

        for err in failures {
            assert!(err.is_generation_failure());
            assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_non_generation_user_message_keeps_detail() {
        let err = ForgeError::invalid_config("path must start with '/'");
        assert_eq!(
            err.user_message(),
            "Invalid configuration: path must start with '/'"
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(
            ForgeError::Status(503).to_string(),
            "Generation endpoint returned HTTP 503"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = ForgeError::with_context("Saving logo", "Permission denied");
        assert_eq!(err.to_string(), "Saving logo: Permission denied");
    }

    #[test]
    fn test_result_ext_context() {
        let io: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = io.with_context("Writing logo.png").unwrap_err();
        assert_eq!(err.to_string(), "Writing logo.png: IO error: denied");
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ForgeError = io_err.into();
        assert!(err.is_io());
        assert!(!err.is_generation_failure());
    }
}
