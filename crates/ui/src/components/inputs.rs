//! # Input Components
//!
//! Form input components for the Logo Forge UI.
//!
//! - **TextInput**: Single-line text input (the logo concept)
//! - **ColorPicker**: Native color picker (the primary color)
//! - **Select**: Dropdown selection (the style)
//!
//! The native widgets do the constraining: the color picker can only yield
//! `#rrggbb`, the select only its options, and `required` blocks an empty
//! text input from submitting.
//!

use dioxus::prelude::*;

/// Shared classes of the text input and the select
const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-blue-500 focus:ring-blue-500";

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-gray-700",
                    "{label}"
                }
            }

            input {
                class: INPUT_CLASS,
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                oninput: move |e| props.on_change.call(e.value()),
            }
        }
    }
}

// ============================================================================
// Color Picker Component
// ============================================================================

/// Properties for ColorPicker component
#[derive(Props, Clone, PartialEq)]
pub struct ColorPickerProps {
    /// Current `#rrggbb` value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Change handler, called with the picker's hex value
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Native color picker
#[component]
pub fn ColorPicker(props: ColorPickerProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-gray-700",
                    "{label}"
                }
            }

            input {
                class: "mt-1 block h-10 w-full rounded-md",
                r#type: "color",
                value: "{props.value}",
                oninput: move |e| props.on_change.call(e.value()),
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-gray-700",
                    "{label}"
                }
            }

            select {
                class: INPUT_CLASS,
                onchange: move |e| props.on_change.call(e.value()),

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_class_is_styled() {
        assert!(INPUT_CLASS.contains("border-gray-300"));
        assert!(crate::STYLES.contains(".border-gray-300"));
        assert!(crate::STYLES.contains(".focus\\:ring-blue-500"));
    }

    #[test]
    fn test_select_option_new() {
        let opt = SelectOption::new("hand-drawn", "Hand Drawn");
        assert_eq!(opt.value, "hand-drawn");
        assert_eq!(opt.label, "Hand Drawn");
    }
}
