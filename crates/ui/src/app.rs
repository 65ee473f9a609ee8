//! Main Application Component for Logo Forge
//!
//! Renders the page from the current [`FormView`]: title, form, result card
//! and the download notice.

use dioxus::prelude::*;

use crate::components::{LogoForm, ResultCard};
use crate::state::{FORM_STATE, StatusLevel, use_form_view};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Logo Forge UI initialized");
    });

    let view = use_form_view();

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 py-12 px-4",
            "data-phase": view.phase.display_name(),

            div {
                class: "max-w-2xl mx-auto",

                h1 { class: "text-4xl font-bold text-center mb-8", "AI Logo Generator" }

                LogoForm { view: view.clone() }

                if let Some(result) = view.result.clone() {
                    ResultCard { result }
                }

                NoticeBar {}
            }
        }
    }
}

// ============================================================================
// Notice Bar Component
// ============================================================================

/// Outcome of the last download, dismissible
#[component]
fn NoticeBar() -> Element {
    let notice = FORM_STATE.read().notice.clone();

    let Some(notice) = notice else {
        return rsx! {};
    };

    let color_class = match notice.level {
        StatusLevel::Info => "text-gray-700",
        StatusLevel::Success => "text-green-700",
        StatusLevel::Error => "text-red-500",
    };

    rsx! {
        div {
            class: "mt-6 flex items-center justify-between text-sm {color_class}",
            span { "{notice.text}" }
            button {
                class: "px-2 text-gray-500 hover:text-gray-700",
                r#type: "button",
                title: "Dismiss",
                onclick: move |_| FORM_STATE.write().clear_notice(),
                "✕"
            }
        }
    }
}
