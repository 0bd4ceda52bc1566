//! Input components for the Q&A forms

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Url,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Url => "url",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub id: String,
    pub name: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub input_class: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

/// Controlled input; the browser blocks submission while it is empty
#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            id: "{props.id}",
            name: "{props.name}",
            class: "{props.input_class}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            required: true,
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
