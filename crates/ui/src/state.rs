//! Form State Management for Logo Forge
//!
//! This module owns everything the logo form displays. State lives in a
//! plain [`FormState`] struct mutated by discrete event handlers, and the
//! view is derived from it by the pure [`FormView::from_state`]. The Dioxus
//! layer only stores the struct in a global signal and renders the view.

use chrono::{DateTime, Local};
use dioxus::prelude::*;
use logoforge_core::{
    ForgeError, ForgeResult, GENERIC_FAILURE_MESSAGE, HexColor, LogoRequest, LogoResponse,
    LogoStyle,
};
use uuid::Uuid;

/// Submit button label while idle
pub const SUBMIT_LABEL: &str = "Generate Logo";

/// Submit button label while a request is in flight
pub const SUBMIT_LABEL_LOADING: &str = "Generating...";

/// File name offered when saving the generated image
pub const DOWNLOAD_FILE_NAME: &str = "logo.png";

// ============================================================================
// Phase
// ============================================================================

/// Coarse request lifecycle of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The last request failed
    Error,
    /// The last request returned an image
    Success,
}

impl Phase {
    /// Get the display name for this phase
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Loading => "Loading",
            Phase::Error => "Error",
            Phase::Success => "Success",
        }
    }
}

// ============================================================================
// Form Input
// ============================================================================

/// The three values the user edits
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormInput {
    pub prompt: String,
    pub color: HexColor,
    pub style: LogoStyle,
}

impl FormInput {
    /// Whether the prompt satisfies the required-field check
    pub fn has_prompt(&self) -> bool {
        !self.prompt.is_empty()
    }

    /// Copy the current values into a request
    pub fn snapshot(&self) -> ForgeResult<LogoRequest> {
        LogoRequest::new(self.prompt.clone(), self.color.clone(), self.style)
    }
}

/// A request taken from the form at submit time
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Correlates log lines of one request
    pub id: Uuid,
    pub request: LogoRequest,
}

// ============================================================================
// Status Notice
// ============================================================================

/// Transient message about side actions (saving the logo)
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

// ============================================================================
// Form State
// ============================================================================

/// All state owned by the logo form
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub input: FormInput,
    pub phase: Phase,
    /// Last successful result; survives later failures
    pub image_url: Option<String>,
    pub generated_at: Option<DateTime<Local>>,
    /// Cleared only when the next submission starts
    pub error: Option<String>,
    /// Download outcome, independent of the request phase
    pub notice: Option<StatusMessage>,
}

impl FormState {
    /// Create a form with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prompt text
    pub fn update_prompt(&mut self, prompt: impl Into<String>) {
        self.input.prompt = prompt.into();
    }

    /// Set the primary color
    pub fn update_color(&mut self, color: HexColor) {
        self.input.color = color;
    }

    /// Set the style
    pub fn update_style(&mut self, style: LogoStyle) {
        self.input.style = style;
    }

    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Whether the submit control should accept a click
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.input.has_prompt()
    }

    /// Start a submission.
    ///
    /// Returns `None` without touching any state when the prompt is empty.
    /// Otherwise enters `Loading`, clears the previous error, and returns a
    /// snapshot of the input; later edits do not affect the snapshot. An
    /// earlier result is left in place.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        let request = match self.input.snapshot() {
            Ok(request) => request,
            Err(ForgeError::EmptyPrompt) => return None,
            Err(e) => {
                tracing::warn!("Form snapshot rejected: {}", e);
                return None;
            }
        };

        self.error = None;
        self.phase = Phase::Loading;

        Some(Submission {
            id: Uuid::new_v4(),
            request,
        })
    }

    /// Start a submission from a click on the submit control.
    ///
    /// Ignored while a request is in flight; otherwise behaves like
    /// [`begin_submit`](Self::begin_submit).
    pub fn try_submit(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }
        self.begin_submit()
    }

    /// Apply the outcome of a submission
    pub fn complete(&mut self, result: ForgeResult<LogoResponse>) {
        match result {
            Ok(response) => {
                self.image_url = Some(response.image_url);
                self.generated_at = Some(Local::now());
                self.phase = Phase::Success;
            }
            Err(e) => {
                self.error = Some(GENERIC_FAILURE_MESSAGE.to_string());
                self.phase = Phase::Error;
                tracing::debug!("Submission failed: {}", e);
            }
        }
    }

    /// Set the status notice
    pub fn set_notice(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.notice = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear the status notice
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

// ============================================================================
// View Model
// ============================================================================

/// What the result card shows
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub image_src: String,
    pub download_href: String,
    pub download_name: &'static str,
    pub generated_at: Option<String>,
}

/// Everything the form renders, derived from [`FormState`]
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub phase: Phase,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub error: Option<String>,
    pub result: Option<ResultView>,
}

impl FormView {
    /// Map state to view
    pub fn from_state(state: &FormState) -> Self {
        let loading = state.is_loading();

        let result = state.image_url.as_ref().map(|url| ResultView {
            image_src: url.clone(),
            download_href: url.clone(),
            download_name: DOWNLOAD_FILE_NAME,
            generated_at: state
                .generated_at
                .map(|at| at.format("%H:%M:%S").to_string()),
        });

        Self {
            phase: state.phase,
            submit_label: if loading {
                SUBMIT_LABEL_LOADING
            } else {
                SUBMIT_LABEL
            },
            submit_disabled: loading,
            error: state.error.clone(),
            result,
        }
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global form state signal
/// Use this in components to access and modify form state
pub static FORM_STATE: GlobalSignal<FormState> = Signal::global(FormState::new);

/// Hook to get the current view
pub fn use_form_view() -> FormView {
    let state = FORM_STATE.read();
    FormView::from_state(&state)
}

/// Hook to get the current input values
pub fn use_form_input() -> FormInput {
    let state = FORM_STATE.read();
    state.input.clone()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn success(url: &str) -> ForgeResult<LogoResponse> {
        Ok(LogoResponse {
            image_url: url.to_string(),
        })
    }

    #[test]
    fn test_defaults_at_mount() {
        let state = FormState::new();
        assert_eq!(state.input.prompt, "");
        assert_eq!(state.input.color.as_str(), "#3B82F6");
        assert_eq!(state.input.style, LogoStyle::Minimalist);
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.image_url.is_none());
        assert!(state.error.is_none());

        let view = FormView::from_state(&state);
        assert_eq!(view.submit_label, SUBMIT_LABEL);
        assert!(!view.submit_disabled);
        assert!(view.result.is_none());
        assert!(view.error.is_none());
    }

    #[test]
    fn test_setters() {
        let mut state = FormState::new();
        state.update_prompt("Brew Haven");
        state.update_color(HexColor::parse("#00ff00").unwrap());
        state.update_style(LogoStyle::Vintage);

        assert_eq!(state.input.prompt, "Brew Haven");
        assert_eq!(state.input.color.as_str(), "#00ff00");
        assert_eq!(state.input.style, LogoStyle::Vintage);
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn test_empty_prompt_blocks_submission() {
        let mut state = FormState::new();
        assert!(!state.can_submit());
        assert!(state.begin_submit().is_none());
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.error.is_none());

    }

    #[test]
    fn test_try_submit_ignored_while_loading() {
        let mut state = FormState::new();
        state.update_prompt("Brew Haven");

        let first = state.try_submit().unwrap();
        assert_eq!(state.phase, Phase::Loading);
        assert!(state.try_submit().is_none());

        state.complete(Ok(LogoResponse {
            image_url: "https://example.com/a.png".to_string(),
        }));
        let second = state.try_submit().unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_whitespace_prompt_submits() {
        let mut state = FormState::new();
        state.update_prompt("   ");
        assert!(state.can_submit());

        let submission = state.begin_submit().unwrap();
        assert_eq!(submission.request.prompt, "   ");
        assert_eq!(state.phase, Phase::Loading);
    }

    #[test]
    fn test_submit_enters_loading_and_disables_button() {
        let mut state = FormState::new();
        state.update_prompt("Brew Haven");

        let submission = state.begin_submit().unwrap();
        assert_eq!(submission.request.prompt, "Brew Haven");
        assert_eq!(state.phase, Phase::Loading);
        assert!(!state.can_submit());

        let view = FormView::from_state(&state);
        assert_eq!(view.submit_label, SUBMIT_LABEL_LOADING);
        assert!(view.submit_disabled);
    }

    #[test]
    fn test_success_shows_image_and_download() {
        let mut state = FormState::new();
        state.update_prompt("Brew Haven");
        state.begin_submit().unwrap();
        state.complete(success("https://example.com/a.png"));

        assert_eq!(state.phase, Phase::Success);
        let view = FormView::from_state(&state);
        let result = view.result.unwrap();
        assert_eq!(result.image_src, "https://example.com/a.png");
        assert_eq!(result.download_href, "https://example.com/a.png");
        assert_eq!(result.download_name, "logo.png");
        assert!(result.generated_at.is_some());
        assert!(view.error.is_none());
        assert!(!view.submit_disabled);
    }

    #[test]
    fn test_failure_shows_generic_message_only() {
        let mut state = FormState::new();
        state.update_prompt("Brew Haven");
        state.begin_submit().unwrap();
        state.complete(Err(ForgeError::Status(502)));

        assert_eq!(state.phase, Phase::Error);
        let view = FormView::from_state(&state);
        assert_eq!(
            view.error.as_deref(),
            Some("Failed to generate logo. Please try again.")
        );
        assert!(view.result.is_none());
        assert_eq!(view.submit_label, SUBMIT_LABEL);
    }

    #[test]
    fn test_resubmit_clears_error_before_response() {
        let mut state = FormState::new();
        state.update_prompt("Brew Haven");
        state.begin_submit().unwrap();
        state.complete(Err(ForgeError::transport("connection reset")));
        assert!(state.error.is_some());

        state.begin_submit().unwrap();
        assert!(state.error.is_none());
        assert_eq!(state.phase, Phase::Loading);
        assert!(FormView::from_state(&state).error.is_none());
    }

    #[test]
    fn test_previous_result_survives_failure_and_new_submission() {
        let mut state = FormState::new();
        state.update_prompt("Brew Haven");
        state.begin_submit().unwrap();
        state.complete(success("https://example.com/first.png"));

        state.begin_submit().unwrap();
        assert_eq!(
            state.image_url.as_deref(),
            Some("https://example.com/first.png")
        );

        state.complete(Err(ForgeError::Timeout));
        let view = FormView::from_state(&state);
        assert!(view.error.is_some());
        assert_eq!(
            view.result.unwrap().image_src,
            "https://example.com/first.png"
        );

        state.begin_submit().unwrap();
        state.complete(success("https://example.com/second.png"));
        assert_eq!(
            state.image_url.as_deref(),
            Some("https://example.com/second.png")
        );
        assert!(state.error.is_none());
    }

    #[test]
    fn test_error_persists_while_editing() {
        let mut state = FormState::new();
        state.update_prompt("Brew Haven");
        state.begin_submit().unwrap();
        state.complete(Err(ForgeError::Status(500)));

        state.update_prompt("Brew Haven Roasters");
        state.update_style(LogoStyle::Modern);
        assert!(state.error.is_some());
        assert_eq!(state.phase, Phase::Error);
    }

    #[test]
    fn test_snapshot_ignores_later_edits() {
        let mut state = FormState::new();
        state.update_prompt("Brew Haven");
        state.update_style(LogoStyle::HandDrawn);

        let submission = state.begin_submit().unwrap();
        state.update_prompt("Something else");
        state.update_color(HexColor::parse("#000000").unwrap());
        state.update_style(LogoStyle::Modern);

        assert_eq!(submission.request.prompt, "Brew Haven");
        assert_eq!(submission.request.color.as_str(), "#3B82F6");
        assert_eq!(submission.request.style, LogoStyle::HandDrawn);
    }

    #[test]
    fn test_notice_is_independent_of_phase() {
        let mut state = FormState::new();
        state.set_notice("Saved logo.png", StatusLevel::Success);
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.error.is_none());
        assert_eq!(state.notice.as_ref().unwrap().level, StatusLevel::Success);

        state.clear_notice();
        assert!(state.notice.is_none());
    }
}
