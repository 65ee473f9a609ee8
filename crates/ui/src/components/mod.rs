//! # UI Components
//!
//! Dioxus components for the Logo Forge window.
//!
//! ## Component Hierarchy
//!
//! ```text
//! App
//! ├── LogoForm
//! │   ├── TextInput (logo concept)
//! │   ├── ColorPicker (primary color)
//! │   ├── Select (style)
//! │   └── submit button + error line
//! ├── ResultCard (when an image URL is set)
//! └── NoticeBar (download outcome)
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod inputs;
pub mod logo_form;
pub mod result_card;

// ============================================================================
// Re-exports
// ============================================================================

pub use inputs::{ColorPicker, Select, SelectOption, TextInput};
pub use logo_form::{LogoForm, style_options};
pub use result_card::ResultCard;
