//! Reusable form input components.

use dioxus::prelude::*;

/// A labeled text input.
#[component]
pub fn TextInput(
    /// Input label
    label: &'static str,
    /// Form field name
    name: &'static str,
    /// Current value
    value: String,
    /// HTML input type
    #[props(default = "text")]
    input_type: &'static str,
    #[props(default = "")]
    placeholder: &'static str,
    /// Called with the new value on every keystroke
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "field",
            span { class: "field-label", "{label}" }
            input {
                r#type: input_type,
                name: name,
                placeholder: placeholder,
                value: "{value}",
                oninput: move |e| on_change.call(e.value()),
            }
        }
    }
}

/// A labeled numeric input. Unparseable input is ignored.
#[component]
pub fn NumberInput(
    /// Input label
    label: &'static str,
    /// Form field name
    name: &'static str,
    /// Current value
    value: f64,
    #[props(default = "any")]
    step: &'static str,
    #[props(default = "0")]
    min: &'static str,
    /// Called when the value parses
    on_change: EventHandler<f64>,
) -> Element {
    rsx! {
        label { class: "field",
            span { class: "field-label", "{label}" }
            input {
                r#type: "number",
                name: name,
                step: step,
                min: min,
                value: "{value}",
                oninput: move |e| {
                    if let Ok(v) = e.value().parse::<f64>() {
                        on_change.call(v);
                    }
                }
            }
        }
    }
}

/// A labeled toggle switch with description.
#[component]
pub fn ToggleInput(
    /// Input label
    label: &'static str,
    /// Description text shown below label
    description: &'static str,
    /// Current checked state
    checked: bool,
    /// Called when the toggle changes
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "field field-toggle",
            div {
                label { class: "field-label", "{label}" }
                p { class: "text-muted", "{description}" }
            }
            input {
                class: "toggle",
                r#type: "checkbox",
                checked: checked,
                onchange: move |e| on_change.call(e.checked()),
            }
        }
    }
}
