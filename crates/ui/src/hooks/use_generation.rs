//! # Generation Hooks
//!
//! Wires the form's event handlers to the generation client:
//! - Submitting the form (one request, result applied back to the form state)
//! - Saving the generated image to disk

use dioxus::prelude::*;
use logoforge_client::{GenerationClient, LogoGenerator};
use logoforge_core::{ForgeError, ForgeResult, LogoResponse};

use crate::file_ops;
use crate::state::{FORM_STATE, StatusLevel, Submission};

// ============================================================================
// Submission
// ============================================================================

/// Send one submission and log its outcome.
///
/// The result is returned untouched; turning it into form state is
/// [`FormState::complete`](crate::state::FormState::complete)'s job.
pub async fn run_submission<G: LogoGenerator>(
    generator: &G,
    submission: &Submission,
) -> ForgeResult<LogoResponse> {
    tracing::info!(
        id = %submission.id,
        style = submission.request.style.as_str(),
        "Generating logo"
    );

    let result = generator.generate(&submission.request).await;

    match &result {
        Ok(response) => {
            tracing::info!(id = %submission.id, url = %response.image_url, "Logo generated");
        }
        Err(e) => {
            tracing::warn!(id = %submission.id, "Logo generation failed: {}", e);
        }
    }

    result
}

/// Hook returning the submit handler of the form.
///
/// The handler ignores clicks while a request is in flight or when the prompt
/// is empty. Otherwise it snapshots the form, spawns the request, and applies
/// the outcome when it resolves. There is no cancellation.
pub fn use_submit_logo() -> Callback<()> {
    let client = use_context::<GenerationClient>();

    use_callback(move |_: ()| {
        let Some(submission) = FORM_STATE.write().try_submit() else {
            return;
        };

        let client = client.clone();
        spawn(async move {
            let result = run_submission(&client, &submission).await;
            FORM_STATE.write().complete(result);
        });
    })
}

// ============================================================================
// Download
// ============================================================================

/// Hook returning the handler that saves the image at the given URL
pub fn use_download_logo() -> Callback<String> {
    let client = use_context::<GenerationClient>();

    use_callback(move |image_url: String| {
        let client = client.clone();
        spawn(async move {
            FORM_STATE.write().clear_notice();

            match file_ops::download_logo(&client, &image_url, None).await {
                Ok(path) => {
                    FORM_STATE.write().set_notice(
                        format!("Logo saved to {}", path.display()),
                        StatusLevel::Success,
                    );
                }
                Err(ForgeError::Cancelled) => {
                    // User cancelled the save dialog
                    tracing::debug!("Save cancelled by user");
                }
                Err(e) => {
                    FORM_STATE
                        .write()
                        .set_notice(format!("Failed to save logo: {}", e), StatusLevel::Error);
                    tracing::error!("Failed to save logo: {}", e);
                }
            }
        });
    })
}

// ============================================================================
// Tests
// ============================================================================
