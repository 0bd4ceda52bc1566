use dioxus::prelude::*;

use crate::components::{
    display::{LoadingIndicator, StatusDisplay},
    inputs::{InputType, ValidatedInput},
};
use crate::console_info;
use crate::qa::{submit_video, QaAction, QaState};
use crate::services::client::QaClient;

#[derive(Props, PartialEq, Clone)]
pub struct VideoSubmissionFormProps {
    pub state: Signal<QaState>,
    pub dispatch: EventHandler<QaAction>,
}

#[component]
pub fn VideoSubmissionForm(props: VideoSubmissionFormProps) -> Element {
    let mut state = props.state;
    let dispatch = props.dispatch;
    let client = use_context::<QaClient>();

    let video = state().video;
    let submitting = video.phase.is_submitting();

    rsx! {
        form {
            id: "videoForm",
            class: "qa-form video-form",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();

                let video_url = state.peek().video.video_url.clone();
                let ticket = state.with_mut(|s| s.begin_video());
                console_info!("[Video Form] Processing {} (request {})", video_url, ticket.0);

                let client = client.clone();
                spawn(async move {
                    submit_video(&client, ticket, video_url, move |action| dispatch.call(action)).await;
                });
            },

            h2 {
                class: "form-title",
                "1. Process a Video"
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "videoUrl",
                    "YouTube URL:"
                }
                ValidatedInput {
                    id: "videoUrl".to_string(),
                    name: "video_url".to_string(),
                    value: video.video_url.clone(),
                    placeholder: "https://youtu.be/...".to_string(),
                    input_type: InputType::Url,
                    input_class: "input-field".to_string(),
                    disabled: false,
                    on_change: move |data: String| {
                        dispatch.call(QaAction::SetVideoUrl(data));
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    id: "processBtn",
                    class: "submit-button",
                    r#type: "submit",
                    disabled: submitting,
                    "Process Video"
                }
                LoadingIndicator {
                    id: "processLoader".to_string(),
                    visible: submitting
                }
            }

            StatusDisplay {
                id: "videoStatus".to_string(),
                phase: video.phase.clone(),
                accent: video.status_accent()
            }
        }
    }
}
