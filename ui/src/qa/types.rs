// Core types for the video Q&A forms - no dioxus imports needed here
use crate::services::client::{ClientResult, ReplyOutcome};

/// Lifecycle of one form.
///
/// `Success` and `Error` are idle phases with a visible outcome: the submit
/// control is enabled and the loader hidden in every phase but `Submitting`.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl FormPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormPhase::Submitting)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FormPhase::Error(_))
    }

    /// Whether the status/answer element is shown
    pub fn outcome_visible(&self) -> bool {
        matches!(self, FormPhase::Success(_) | FormPhase::Error(_))
    }

    pub fn outcome_text(&self) -> Option<&str> {
        match self {
            FormPhase::Success(text) | FormPhase::Error(text) => Some(text),
            _ => None,
        }
    }

    fn settle(result: ClientResult<ReplyOutcome>) -> Self {
        match result {
            Ok(ReplyOutcome::Success(text)) => FormPhase::Success(text),
            Ok(ReplyOutcome::ApplicationError(text)) => FormPhase::Error(text),
            Err(error) => FormPhase::Error(error.user_message()),
        }
    }
}

/// Left-border colour of an outcome element, as a CSS custom property
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Accent {
    Accent,
    Success,
    Secondary,
}

impl Accent {
    pub fn css_var(&self) -> &'static str {
        match self {
            Accent::Accent => "var(--accent)",
            Accent::Success => "var(--success)",
            Accent::Secondary => "var(--secondary)",
        }
    }
}

/// Sequence number of one submission of one form.
///
/// Only the completion carrying a form's latest ticket is applied.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct RequestTicket(pub u64);

impl RequestTicket {
    pub fn next(self) -> Self {
        RequestTicket(self.0 + 1)
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum QaAction {
    // Video form actions
    SetVideoUrl(String),
    VideoSubmitted(RequestTicket),
    VideoCompleted {
        ticket: RequestTicket,
        result: ClientResult<ReplyOutcome>,
    },

    // Question form actions
    SetQuestion(String),
    QuestionSubmitted(RequestTicket),
    QuestionCompleted {
        ticket: RequestTicket,
        result: ClientResult<ReplyOutcome>,
    },
}

// Form state structs
#[derive(Clone, PartialEq, Debug, Default)]
pub struct VideoFormState {
    pub video_url: String,
    pub phase: FormPhase,
    pub latest_ticket: RequestTicket,
}

impl VideoFormState {
    pub fn status_accent(&self) -> Option<Accent> {
        match self.phase {
            FormPhase::Success(_) => Some(Accent::Success),
            FormPhase::Error(_) => Some(Accent::Accent),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct QuestionFormState {
    pub question: String,
    pub phase: FormPhase,
    pub latest_ticket: RequestTicket,
    /// Set once a video has been processed successfully; never cleared
    pub enabled: bool,
}

impl QuestionFormState {
    pub fn answer_accent(&self) -> Option<Accent> {
        match self.phase {
            FormPhase::Success(_) => Some(Accent::Secondary),
            FormPhase::Error(_) => Some(Accent::Accent),
            _ => None,
        }
    }

    pub fn input_disabled(&self) -> bool {
        !self.enabled
    }

    pub fn submit_disabled(&self) -> bool {
        !self.enabled || self.phase.is_submitting()
    }
}

// Main state struct
#[derive(Clone, PartialEq, Debug, Default)]
pub struct QaState {
    pub video: VideoFormState,
    pub question: QuestionFormState,
}

impl QaState {
    /// Start a video submission and return its ticket
    pub fn begin_video(&mut self) -> RequestTicket {
        let ticket = self.video.latest_ticket.next();
        self.reduce_in_place(QaAction::VideoSubmitted(ticket));
        ticket
    }

    /// Start a question submission, unless the question form is still locked
    pub fn begin_question(&mut self) -> Option<RequestTicket> {
        if !self.question.enabled {
            return None;
        }
        let ticket = self.question.latest_ticket.next();
        self.reduce_in_place(QaAction::QuestionSubmitted(ticket));
        Some(ticket)
    }

    /// Apply an action without replacing the state value
    pub fn reduce_in_place(&mut self, action: QaAction) {
        match action {
            // Video form actions
            QaAction::SetVideoUrl(url) => {
                self.video.video_url = url;
            }
            QaAction::VideoSubmitted(ticket) => {
                if ticket > self.video.latest_ticket {
                    self.video.latest_ticket = ticket;
                }
                self.video.phase = FormPhase::Submitting;
            }
            QaAction::VideoCompleted { ticket, result } => {
                if ticket != self.video.latest_ticket {
                    tracing::debug!(
                        "Dropping superseded video reply {:?} (latest {:?})",
                        ticket,
                        self.video.latest_ticket
                    );
                    return;
                }
                self.video.phase = FormPhase::settle(result);
                if matches!(self.video.phase, FormPhase::Success(_)) {
                    self.question.enabled = true;
                }
            }

            // Question form actions
            QaAction::SetQuestion(question) => {
                self.question.question = question;
            }
            QaAction::QuestionSubmitted(ticket) => {
                if ticket > self.question.latest_ticket {
                    self.question.latest_ticket = ticket;
                }
                self.question.phase = FormPhase::Submitting;
            }
            QaAction::QuestionCompleted { ticket, result } => {
                if ticket != self.question.latest_ticket {
                    tracing::debug!(
                        "Dropping superseded answer {:?} (latest {:?})",
                        ticket,
                        self.question.latest_ticket
                    );
                    return;
                }
                self.question.phase = FormPhase::settle(result);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client::ClientError;

    fn video_reply(state: &mut QaState, result: ClientResult<ReplyOutcome>) {
        let ticket = state.begin_video();
        state.reduce_in_place(QaAction::VideoCompleted { ticket, result });
    }

    #[test]
    fn test_initial_state_locks_question_form() {
        let state = QaState::default();

        assert_eq!(state.video.phase, FormPhase::Idle);
        assert!(!state.video.phase.outcome_visible());
        assert!(state.question.input_disabled());
        assert!(state.question.submit_disabled());
    }

    #[test]
    fn test_submitting_hides_previous_outcome() {
        let mut state = QaState::default();
        video_reply(
            &mut state,
            Ok(ReplyOutcome::ApplicationError("bad url".to_string())),
        );
        assert!(state.video.phase.outcome_visible());

        state.begin_video();
        assert!(state.video.phase.is_submitting());
        assert!(!state.video.phase.outcome_visible());
        assert_eq!(state.video.status_accent(), None);
    }

    #[test]
    fn test_video_success_unlocks_questions() {
        let mut state = QaState::default();
        video_reply(&mut state, Ok(ReplyOutcome::Success("ok".to_string())));

        assert_eq!(state.video.phase.outcome_text(), Some("ok"));
        assert!(!state.video.phase.is_error());
        assert_eq!(state.video.status_accent(), Some(Accent::Success));
        assert!(!state.question.input_disabled());
        assert!(!state.question.submit_disabled());
    }

    #[test]
    fn test_video_error_keeps_prior_enablement() {
        let mut state = QaState::default();
        video_reply(
            &mut state,
            Ok(ReplyOutcome::ApplicationError("bad url".to_string())),
        );
        assert_eq!(state.video.phase.outcome_text(), Some("bad url"));
        assert!(state.video.phase.is_error());
        assert_eq!(state.video.status_accent(), Some(Accent::Accent));
        assert!(!state.question.enabled);

        // A later failure does not re-lock an unlocked question form
        video_reply(&mut state, Ok(ReplyOutcome::Success("ok".to_string())));
        video_reply(&mut state, Err(ClientError::network("Failed to fetch")));
        assert_eq!(
            state.video.phase,
            FormPhase::Error("Error: Failed to fetch".to_string())
        );
        assert!(state.question.enabled);
    }

    #[test]
    fn test_repeated_success_is_idempotent() {
        let mut once = QaState::default();
        video_reply(&mut once, Ok(ReplyOutcome::Success("ok".to_string())));

        let mut twice = once.clone();
        video_reply(&mut twice, Ok(ReplyOutcome::Success("ok".to_string())));

        assert_eq!(once.video.phase, twice.video.phase);
        assert_eq!(once.question, twice.question);
    }

    #[test]
    fn test_answer_rendering() {
        let mut state = QaState::default();
        video_reply(&mut state, Ok(ReplyOutcome::Success("ok".to_string())));

        let ticket = state.begin_question().unwrap();
        assert!(state.question.submit_disabled());
        state.reduce_in_place(QaAction::QuestionCompleted {
            ticket,
            result: Ok(ReplyOutcome::Success("42".to_string())),
        });
        assert_eq!(state.question.phase, FormPhase::Success("42".to_string()));
        assert_eq!(state.question.answer_accent(), Some(Accent::Secondary));
        assert!(!state.question.submit_disabled());

        let ticket = state.begin_question().unwrap();
        state.reduce_in_place(QaAction::QuestionCompleted {
            ticket,
            result: Ok(ReplyOutcome::ApplicationError("no context".to_string())),
        });
        assert_eq!(
            state.question.phase,
            FormPhase::Error("no context".to_string())
        );
        assert!(state.question.phase.is_error());
    }

    #[test]
    fn test_locked_question_form_refuses_submission() {
        let mut state = QaState::default();
        assert_eq!(state.begin_question(), None);
        assert_eq!(state.question.phase, FormPhase::Idle);
    }

    #[test]
    fn test_superseded_reply_is_dropped() {
        let mut state = QaState::default();
        let first = state.begin_video();
        let second = state.begin_video();
        assert!(second > first);

        // The newer request resolves first
        state.reduce_in_place(QaAction::VideoCompleted {
            ticket: second,
            result: Ok(ReplyOutcome::ApplicationError("bad url".to_string())),
        });
        // The older one resolves late and must not overwrite it
        state.reduce_in_place(QaAction::VideoCompleted {
            ticket: first,
            result: Ok(ReplyOutcome::Success("ok".to_string())),
        });

        assert_eq!(state.video.phase, FormPhase::Error("bad url".to_string()));
        assert!(!state.question.enabled);
    }

    #[test]
    fn test_accent_css_vars() {
        assert_eq!(Accent::Accent.css_var(), "var(--accent)");
        assert_eq!(Accent::Success.css_var(), "var(--success)");
        assert_eq!(Accent::Secondary.css_var(), "var(--secondary)");
    }
}
