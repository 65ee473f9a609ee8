//! # UI Hooks
//!
//! Custom Dioxus hooks for the Logo Forge UI.
//!
//! This module provides reusable hooks for:
//! - Submitting the logo form to the generation endpoint
//! - Saving the generated logo

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_generation;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_generation::{run_submission, use_download_logo, use_submit_logo};
