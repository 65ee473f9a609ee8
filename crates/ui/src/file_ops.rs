//! File Operations for Logo Forge
//!
//! Saving the generated logo to disk using the `rfd` crate for the native
//! save dialog. Fetching the image goes through the same client that
//! generated it, so relative and `data:` URLs work too.

use logoforge_client::GenerationClient;
use logoforge_core::{ForgeError, ForgeResult};
use rfd::AsyncFileDialog;
use std::path::PathBuf;

use crate::state::DOWNLOAD_FILE_NAME;

// ============================================================================
// File Filter Constants
// ============================================================================

/// File extension of saved logos
pub const FILE_EXTENSION: &str = "png";

/// Display name for file filter
pub const FILE_TYPE_NAME: &str = "PNG Image";

// ============================================================================
// File Dialog Functions
// ============================================================================

/// Open a file dialog to select where to save the logo
///
/// The suggested file name is always `logo.png`.
///
/// Returns the selected path (with `.png` extension guaranteed), or None if
/// the dialog was cancelled.
pub async fn show_save_dialog() -> Option<PathBuf> {
    let file = AsyncFileDialog::new()
        .set_title("Save Logo")
        .set_file_name(DOWNLOAD_FILE_NAME)
        .add_filter(FILE_TYPE_NAME, &[FILE_EXTENSION])
        .save_file()
        .await?;
    Some(ensure_extension(file.path().to_path_buf()))
}

// ============================================================================
// Logo Download
// ============================================================================

/// Save the image behind `image_url`
///
/// If `path` is `Some`, saves directly to that path (no dialog shown).
/// If `path` is `None`, shows the save dialog; cancelling it yields
/// [`ForgeError::Cancelled`].
pub async fn download_logo(
    client: &GenerationClient,
    image_url: &str,
    path: Option<PathBuf>,
) -> ForgeResult<PathBuf> {
    let file_path = match path {
        Some(p) => p,
        None => show_save_dialog().await.ok_or(ForgeError::Cancelled)?,
    };

    client.save_image(image_url, &file_path).await?;
    Ok(file_path)
}

// ============================================================================
// Utility Functions
// ============================================================================

/// Ensure a path has the `.png` extension
pub fn ensure_extension(path: PathBuf) -> PathBuf {
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(FILE_EXTENSION))
    {
        path
    } else {
        let mut new_path = path.clone();
        let new_name = format!(
            "{}.{}",
            path.file_name().and_then(|n| n.to_str()).unwrap_or("logo"),
            FILE_EXTENSION
        );
        new_path.set_file_name(new_name);
        new_path
    }
}

// ============================================================================
// Tests
// ============================================================================
