use dioxus::prelude::*;

/// Controlled single-line text input.
///
/// The value lives in a component-local signal and is replaced on every input
/// event, so the rendered value always mirrors the state.
#[component]
pub fn TextInput(
    /// Placeholder text shown while the input is empty
    placeholder: String,
) -> Element {
    let mut value = use_signal(String::new);

    rsx!(input {
        id: "textInput",
        r#type: "text",
        value: "{value}",
        placeholder: "{placeholder}",
        oninput: move |event| value.set(event.value()),
        style: "width: 90%; background-color: transparent; border: 2px solid gray; padding: 7px;",
    })
}
