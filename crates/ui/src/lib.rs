//! # Logo Forge UI
//!
//! Dioxus Desktop UI for Logo Forge.
//!
//! A single window holding the logo request form: type a concept, pick a
//! color and a style, submit, and see the generated logo with a download
//! link.
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod file_ops;
pub mod hooks;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use logoforge_client;
pub use logoforge_core;

pub use app::App;
pub use file_ops::{download_logo, show_save_dialog};
pub use state::{
    DOWNLOAD_FILE_NAME, FORM_STATE, FormInput, FormState, FormView, Phase, ResultView,
    SUBMIT_LABEL, SUBMIT_LABEL_LOADING, StatusLevel, StatusMessage, Submission,
};

pub use components::{ColorPicker, LogoForm, ResultCard, Select, SelectOption, TextInput};
pub use hooks::{run_submission, use_download_logo, use_submit_logo};

use logoforge_client::GenerationClient;
use logoforge_core::{ForgeConfig, ForgeResult};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Logo Forge";

/// Application display title
pub const TITLE: &str = "AI Logo Generator";

/// CSS styles for the application
pub(crate) const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Logo Forge desktop application
///
/// Builds the generation client from `config` and hands it to the component
/// tree as context. Fails only if the endpoint settings are unusable.
///
/// # Example
///
/// ```rust,ignore
/// fn main() -> logoforge_core::ForgeResult<()> {
///     logoforge_ui::launch(logoforge_core::ForgeConfig::default())
/// }
/// ```
pub fn launch(config: ForgeConfig) -> ForgeResult<()> {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let client = GenerationClient::new(&config.endpoint)?;
    tracing::info!("Generation endpoint: {}", client.endpoint());

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        ))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(480.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(client)
        .launch(App);

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
