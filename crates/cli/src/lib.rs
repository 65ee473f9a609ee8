//! # Logo Forge CLI
//!
//! Command-line interface for Logo Forge.
//!
//! Sends the same request the desktop form sends, without a window.
//!
//! ## Commands
//!
//! - `generate` - Request a logo and save it (default `logo.png`)
//! - `styles` - List the available styles
//!

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use logoforge_client::{GenerationClient, LogoGenerator};
use logoforge_core::{
    CONFIG_FILE_NAME, DEFAULT_COLOR, ForgeConfig, ForgeResult, HexColor, LogoRequest,
    LogoResponse, LogoStyle,
};

// Re-export dependencies for use in main.rs
pub use logoforge_client;
pub use logoforge_core;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Arguments
// ============================================================================

/// Request AI generated logos from the command line
#[derive(Debug, Parser)]
#[command(name = "logoforge", version, about)]
pub struct Cli {
    /// Config file (defaults to ./logoforge.toml when present)
    #[arg(long, global = true, env = "LOGOFORGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the generation server base URL
    #[arg(long, global = true, env = "LOGOFORGE_BASE_URL")]
    pub base_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a logo and save it
    Generate(GenerateArgs),
    /// List available styles
    Styles,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Logo concept, e.g. "A coffee shop called Brew Haven"
    #[arg(short, long)]
    pub prompt: String,

    /// Primary color as #rrggbb
    #[arg(short, long, default_value = DEFAULT_COLOR)]
    pub color: HexColor,

    /// minimalist, vintage, modern or hand-drawn
    #[arg(short, long, default_value = "minimalist")]
    pub style: LogoStyle,

    /// Where to save the image
    #[arg(short, long, default_value = "logo.png")]
    pub output: PathBuf,

    /// Print the image URL without downloading it
    #[arg(long)]
    pub no_download: bool,
}

// ============================================================================
// Commands
// ============================================================================

/// Resolve configuration from the command line
pub fn load_config(cli: &Cli) -> ForgeResult<ForgeConfig> {
    let config = match &cli.config {
        Some(path) => ForgeConfig::load(path)?,
        None => ForgeConfig::load_or_default(Path::new(CONFIG_FILE_NAME))?,
    };

    match &cli.base_url {
        Some(base_url) => config.with_base_url(base_url.clone()),
        None => Ok(config),
    }
}

/// Validate the arguments and issue one generation request.
///
/// An empty prompt fails before anything is sent.
pub async fn request_logo<G: LogoGenerator>(
    generator: &G,
    args: &GenerateArgs,
) -> ForgeResult<LogoResponse> {
    let request = LogoRequest::new(args.prompt.clone(), args.color.clone(), args.style)?;
    tracing::debug!(?request, "Sending generation request");
    generator.generate(&request).await
}

/// Run a parsed command line
pub async fn run(cli: Cli) -> ForgeResult<()> {
    match &cli.command {
        Command::Styles => {
            print_styles();
            Ok(())
        }
        Command::Generate(args) => {
            let config = load_config(&cli)?;
            let client = GenerationClient::new(&config.endpoint)?;

            println!(
                "{} {} ({}, {})",
                "Generating".cyan().bold(),
                args.prompt,
                args.style.display_name(),
                args.color
            );

            let response = request_logo(&client, args).await?;
            println!("{} {}", "Image:".green().bold(), response.image_url);

            if !args.no_download {
                client.save_image(&response.image_url, &args.output).await?;
                println!("{} {}", "Saved:".green().bold(), args.output.display());
            }

            Ok(())
        }
    }
}

fn print_styles() {
    for style in LogoStyle::all() {
        println!("{:<12} {}", style.as_str().bold(), style.display_name());
    }
}

// ============================================================================
// Tests
// ============================================================================
