//! Reusable multi-line text input component

use dioxus::prelude::*;

/// Controlled multi-line text field with consistent styling.
///
/// Fires `on_input` with the full updated value on every input event;
/// there is no local buffering, the parent owns the text.
#[component]
pub fn TextArea(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = 3)] rows: u32,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
) -> Element {
    let base = "w-full px-3 py-2 bg-gray-900 text-gray-200 text-sm rounded-lg border border-gray-600 focus:outline-none focus:border-blue-500 placeholder-gray-500";

    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    rsx! {
        textarea {
            class: "{base} {disabled_class}",
            id: id.as_deref(),
            rows: "{rows}",
            value: "{value}",
            placeholder,
            disabled,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
