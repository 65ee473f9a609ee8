//! # Logo Forge Core
//!
//! Core types, configuration, and error handling for Logo Forge.
//!
//! This crate provides the foundational building blocks shared by the
//! desktop UI, the generation client, and the CLI:
//!
//! - **Types**: The request/response contract (`LogoRequest`, `LogoResponse`)
//!   and the values the form edits (`HexColor`, `LogoStyle`)
//! - **Config**: `ForgeConfig` loaded from `logoforge.toml`
//! - **Errors**: Unified error handling with `ForgeError` and `ForgeResult`
//!

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{CONFIG_FILE_NAME, EndpointConfig, ForgeConfig, WindowConfig};
pub use error::{ForgeError, ForgeResult, GENERIC_FAILURE_MESSAGE, ResultExt};
pub use traits::Validatable;
pub use types::{DEFAULT_COLOR, HexColor, LogoRequest, LogoResponse, LogoStyle};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
