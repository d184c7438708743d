use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            "data-component": "label",
            "for": "{html_for}",
            {children}
        }
    }
}

/// Inline validation message under a field. Renders nothing without a message.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "field-error", "{message}" }
        }
    }
}
