use dioxus::prelude::*;

use crate::components::forms::{QuestionForm, VideoSubmissionForm};
use crate::qa::{QaAction, QaState};
use crate::services::client::QaClient;
use crate::services::config::QaClientConfig;
use crate::{console_debug, console_error, console_info, console_warn};

const QA_SERVICE_CSS: Asset = asset!("/assets/styling/qa_service.css");

#[component]
pub fn VideoQaService() -> Element {
    // Consolidated state management
    let mut state = use_signal(QaState::default);

    // One HTTP client for both forms, bound to the page origin
    use_context_provider(|| {
        let config = QaClientConfig::for_browser();
        if let Err(errors) = config.validate() {
            console_warn!("[Q&A Service] Invalid client configuration: {}", errors.join("; "));
        }
        console_info!("[Q&A Service] Backend at {}", config.base_url);
        QaClient::new(config)
    });

    // In-place reduction keeps the Signal reactive
    let dispatch = EventHandler::new(move |action: QaAction| {
        match &action {
            QaAction::VideoCompleted { result: Err(error), .. } => {
                console_error!("[Video Form] Request failed: {}", error);
            }
            QaAction::QuestionCompleted { result: Err(error), .. } => {
                console_error!("[Question Form] Request failed: {}", error);
            }
            _ => console_debug!("[Q&A Service] {:?}", action),
        }
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: QA_SERVICE_CSS }

        div {
            class: "qa-service-container",

            div {
                class: "title-container",
                h1 {
                    class: "qa-title",
                    "Video Q&A"
                }
                p {
                    class: "qa-subtitle",
                    "Process a YouTube video, then ask questions about what was said."
                }
            }

            VideoSubmissionForm {
                state: state,
                dispatch: dispatch
            }

            QuestionForm {
                state: state,
                dispatch: dispatch
            }
        }
    }
}
