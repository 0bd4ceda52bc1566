use dioxus::prelude::*;

use super::status_display::outcome_style;
use crate::qa::{Accent, FormPhase};

#[derive(Props, PartialEq, Clone)]
pub struct AnswerDisplayProps {
    pub id: String,
    pub phase: FormPhase,
    pub accent: Option<Accent>,
}

/// Outcome of a question.
///
/// The answer is interpolated as text, so markup sent by the backend is shown
/// literally. Only the "Answer:" label is emphasized.
#[component]
pub fn AnswerDisplay(props: AnswerDisplayProps) -> Element {
    let style = outcome_style(props.phase.outcome_visible(), props.accent);

    rsx! {
        div {
            id: "{props.id}",
            class: if props.phase.is_error() { "answer error" } else { "answer" },
            style: "{style}",
            aria_live: "polite",
            {match &props.phase {
                FormPhase::Success(answer) => rsx! {
                    strong { "Answer:" }
                    " {answer}"
                },
                FormPhase::Error(error) => rsx! { "{error}" },
                _ => rsx! {},
            }}
        }
    }
}
