//! # Logo Forge Client
//!
//! HTTP client for the external generation endpoint.
//!
//! The form only needs one operation, [`LogoGenerator::generate`]: POST the
//! snapshot of the form as JSON and read back `{"imageUrl": ...}`. Everything
//! that is not a 2xx with that body is an error. The same client also fetches
//! the generated image bytes for saving to disk.
//!

pub mod client;
pub mod data_uri;

pub use client::{GenerationClient, LogoGenerator};
pub use data_uri::DataUri;

// Re-export internal crates for convenience
pub use logoforge_core;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
