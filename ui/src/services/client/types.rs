// Wire types for the video Q&A backend - no dioxus imports needed here
use serde::{Deserialize, Serialize};

/// Body returned by both `/process_video` and `/ask_question`.
///
/// Fields are read optimistically: every field is optional and anything the
/// server adds beyond these is ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ServerReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Which success field a reply is expected to carry
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ReplyKind {
    Video,
    Question,
}

/// Classified reply body
#[derive(Clone, PartialEq, Debug)]
pub enum ReplyOutcome {
    Success(String),
    ApplicationError(String),
}

impl ServerReply {
    pub fn message(text: &str) -> Self {
        Self {
            message: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn answer(text: &str) -> Self {
        Self {
            answer: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn error(text: &str) -> Self {
        Self {
            error: Some(text.to_string()),
            ..Self::default()
        }
    }

    /// Split the reply into the success or application-error path.
    ///
    /// An empty `error` string counts as absent. A missing success field
    /// renders as empty text.
    pub fn classify(self, kind: ReplyKind) -> ReplyOutcome {
        match self.error {
            Some(error) if !error.is_empty() => ReplyOutcome::ApplicationError(error),
            _ => {
                let text = match kind {
                    ReplyKind::Video => self.message,
                    ReplyKind::Question => self.answer,
                };
                ReplyOutcome::Success(text.unwrap_or_default())
            }
        }
    }
}
