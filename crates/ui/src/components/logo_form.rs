//! The logo request form: concept, color, style and the submit button.

use dioxus::prelude::*;
use logoforge_core::{HexColor, LogoStyle};

use crate::components::inputs::{ColorPicker, Select, SelectOption, TextInput};
use crate::hooks::use_submit_logo;
use crate::state::{FORM_STATE, FormView, use_form_input};

/// Options for the style selector, in display order
pub fn style_options() -> Vec<SelectOption> {
    LogoStyle::all()
        .iter()
        .map(|style| SelectOption::new(style.as_str(), style.display_name()))
        .collect()
}

/// Logo request form
#[component]
pub fn LogoForm(view: FormView) -> Element {
    let input = use_form_input();
    let submit = use_submit_logo();

    rsx! {
        form {
            class: "space-y-6 mb-8",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                submit.call(());
            },

            TextInput {
                label: "Logo Concept".to_string(),
                value: input.prompt.clone(),
                placeholder: "e.g., A coffee shop called Brew Haven".to_string(),
                required: true,
                on_change: move |value: String| {
                    FORM_STATE.write().update_prompt(value);
                },
            }

            ColorPicker {
                label: "Primary Color".to_string(),
                value: input.color.as_str().to_string(),
                on_change: move |value: String| match HexColor::parse(value) {
                    Ok(color) => FORM_STATE.write().update_color(color),
                    Err(e) => tracing::warn!("Ignoring color picker value: {}", e),
                },
            }

            Select {
                label: "Style".to_string(),
                value: input.style.as_str().to_string(),
                options: style_options(),
                on_change: move |value: String| match value.parse::<LogoStyle>() {
                    Ok(style) => FORM_STATE.write().update_style(style),
                    Err(e) => tracing::warn!("Ignoring style value: {}", e),
                },
            }

            button {
                class: "w-full bg-blue-600 text-white py-2 px-4 rounded-md hover:bg-blue-700 disabled:bg-gray-400 disabled:cursor-not-allowed",
                r#type: "submit",
                disabled: view.submit_disabled,
                "{view.submit_label}"
            }

            if let Some(error) = &view.error {
                p { class: "text-red-500 text-center", "{error}" }
            }
        }
    }
}
