use dioxus::prelude::*;

use crate::components::{
    display::{AnswerDisplay, LoadingIndicator},
    inputs::{InputType, ValidatedInput},
};
use crate::qa::{submit_question, QaAction, QaState};
use crate::services::client::QaClient;
use crate::{console_info, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct QuestionFormProps {
    pub state: Signal<QaState>,
    pub dispatch: EventHandler<QaAction>,
}

#[component]
pub fn QuestionForm(props: QuestionFormProps) -> Element {
    let mut state = props.state;
    let dispatch = props.dispatch;
    let client = use_context::<QaClient>();

    let question = state().question;

    rsx! {
        form {
            id: "questionForm",
            class: "qa-form question-form",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();

                let text = state.peek().question.question.clone();
                let Some(ticket) = state.with_mut(|s| s.begin_question()) else {
                    console_warn!("[Question Form] Ignoring submit before a video was processed");
                    return;
                };
                console_info!("[Question Form] Asking (request {})", ticket.0);

                let client = client.clone();
                spawn(async move {
                    submit_question(&client, ticket, text, move |action| dispatch.call(action)).await;
                });
            },

            h2 {
                class: "form-title",
                "2. Ask a Question"
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "question",
                    "Question:"
                }
                ValidatedInput {
                    id: "question".to_string(),
                    name: "question".to_string(),
                    value: question.question.clone(),
                    placeholder: "What is this video about?".to_string(),
                    input_type: InputType::Text,
                    input_class: "input-field".to_string(),
                    disabled: question.input_disabled(),
                    on_change: move |data: String| {
                        dispatch.call(QaAction::SetQuestion(data));
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    id: "askBtn",
                    class: "submit-button",
                    r#type: "submit",
                    disabled: question.submit_disabled(),
                    "Ask"
                }
                LoadingIndicator {
                    id: "askLoader".to_string(),
                    visible: question.phase.is_submitting()
                }
            }

            AnswerDisplay {
                id: "answer".to_string(),
                phase: question.phase.clone(),
                accent: question.answer_accent()
            }
        }
    }
}
