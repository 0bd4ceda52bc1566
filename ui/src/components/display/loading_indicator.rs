use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub id: String,
    pub visible: bool,
}

#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    let display = if props.visible { "inline-block" } else { "none" };

    rsx! {
        span {
            id: "{props.id}",
            class: "loader",
            style: "display: {display};",
            aria_hidden: "true",
        }
    }
}
