//! Common traits for Logo Forge
//!
//! Shared behaviors implemented by configuration and wire types.

use crate::error::{ForgeError, ForgeResult};
use crate::types::LogoRequest;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// # Example
///
/// ```rust,ignore
/// use logoforge_core::{ForgeConfig, Validatable};
///
/// let config = ForgeConfig::default();
/// assert!(config.is_valid());
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `ForgeError` describing the problem.
    fn validate(&self) -> ForgeResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

impl Validatable for LogoRequest {
    // Color and style are checked by their types; only the prompt can be empty
    // when a request is built by hand.
    fn validate(&self) -> ForgeResult<()> {
        if self.prompt.is_empty() {
            Err(ForgeError::EmptyPrompt)
        } else {
            Ok(())
        }
    }
}
