use dioxus::prelude::*;

use crate::qa::{Accent, FormPhase};

#[derive(Props, PartialEq, Clone)]
pub struct StatusDisplayProps {
    pub id: String,
    pub phase: FormPhase,
    pub accent: Option<Accent>,
}

/// Outcome of a video submission, rendered as plain text
#[component]
pub fn StatusDisplay(props: StatusDisplayProps) -> Element {
    let style = outcome_style(props.phase.outcome_visible(), props.accent);
    let text = props.phase.outcome_text().unwrap_or_default().to_string();

    rsx! {
        div {
            id: "{props.id}",
            class: if props.phase.is_error() { "status error" } else { "status" },
            style: "{style}",
            role: "status",
            "{text}"
        }
    }
}

/// Inline style shared by the status and answer elements
pub fn outcome_style(visible: bool, accent: Option<Accent>) -> String {
    let display = if visible { "block" } else { "none" };
    match accent {
        Some(accent) => format!("display: {}; border-left-color: {};", display, accent.css_var()),
        None => format!("display: {};", display),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_status(phase: FormPhase, accent: Option<Accent>) -> String {
        let mut dom = VirtualDom::new_with_props(
            StatusDisplay,
            StatusDisplayProps {
                id: "videoStatus".to_string(),
                phase,
                accent,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_status_success() {
        let html = render_status(FormPhase::Success("ok".to_string()), Some(Accent::Success));

        assert!(html.contains(r#"id="videoStatus""#), "{}", html);
        assert!(html.contains(r#"class="status""#), "{}", html);
        assert!(!html.contains("error"), "{}", html);
        assert!(html.contains("border-left-color: var(--success)"), "{}", html);
        assert!(html.contains(">ok<"), "{}", html);
    }

    #[test]
    fn test_status_error() {
        let html = render_status(
            FormPhase::Error("bad url".to_string()),
            Some(Accent::Accent),
        );

        assert!(html.contains(r#"class="status error""#), "{}", html);
        assert!(html.contains("border-left-color: var(--accent)"), "{}", html);
        assert!(html.contains("bad url"), "{}", html);
    }

    #[test]
    fn test_status_hidden_when_idle() {
        let html = render_status(FormPhase::Idle, None);

        assert!(html.contains("display: none"), "{}", html);
    }

    #[test]
    fn test_outcome_style() {
        assert_eq!(outcome_style(false, None), "display: none;");
        assert_eq!(
            outcome_style(true, Some(Accent::Success)),
            "display: block; border-left-color: var(--success);"
        );
    }
}
