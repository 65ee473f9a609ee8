//! Logo Forge
//!
//! Desktop form for requesting AI generated logos.
//!
//! This is the main entry point for the Dioxus Desktop application.

use std::path::Path;

use logoforge_core::{CONFIG_FILE_NAME, ForgeConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .pretty()
        .init();

    let config = ForgeConfig::load_or_default(Path::new(CONFIG_FILE_NAME))?;

    // Launch the Dioxus desktop application
    logoforge_ui::launch(config)?;

    Ok(())
}
