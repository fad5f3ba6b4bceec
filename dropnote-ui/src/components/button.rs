//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Blue background - the primary action in a dialog
    Primary,
    /// Gray text - secondary/cancel actions
    Secondary,
    /// Red text - destructive actions
    Danger,
}

/// Reusable button with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-blue-600 hover:bg-blue-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Secondary => {
            "text-gray-400 hover:text-gray-200 disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Danger => {
            "text-red-500 hover:text-red-400 disabled:opacity-50 disabled:cursor-not-allowed"
        }
    };

    let base = "px-4 py-2 rounded-lg font-medium transition-colors";
    let computed_class = match &class {
        Some(extra) => format!("{base} {variant_class} {extra}"),
        None => format!("{base} {variant_class}"),
    };

    rsx! {
        button {
            r#type: "button",
            class: "{computed_class}",
            disabled,
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}
