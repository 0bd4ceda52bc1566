//! Submission orchestrator - runs one backend exchange per form submission

use tracing::{info, warn};

use crate::qa::types::{QaAction, RequestTicket};
use crate::services::client::{QaBackend, ReplyKind, ReplyOutcome};

/// Send a video URL to the backend and report the outcome.
///
/// The caller issues `ticket` (see [`crate::qa::QaState::begin_video`]) before
/// spawning this, so the loading state is visible immediately.
pub async fn submit_video<B>(
    backend: &B,
    ticket: RequestTicket,
    video_url: String,
    dispatch: impl Fn(QaAction),
) where
    B: QaBackend + ?Sized,
{
    info!("[Video] Submitting {} (request {})", video_url, ticket.0);

    let result = backend
        .process_video(&video_url)
        .await
        .map(|reply| reply.classify(ReplyKind::Video));

    match &result {
        Ok(ReplyOutcome::Success(_)) => info!("[Video] Request {} processed", ticket.0),
        Ok(ReplyOutcome::ApplicationError(error)) => {
            warn!("[Video] Request {} rejected: {}", ticket.0, error)
        }
        Err(error) => warn!("[Video] Request {} failed: {}", ticket.0, error),
    }

    dispatch(QaAction::VideoCompleted { ticket, result });
}

/// Send a question to the backend and report the answer
pub async fn submit_question<B>(
    backend: &B,
    ticket: RequestTicket,
    question: String,
    dispatch: impl Fn(QaAction),
) where
    B: QaBackend + ?Sized,
{
    info!("[Question] Asking (request {})", ticket.0);

    let result = backend
        .ask_question(&question)
        .await
        .map(|reply| reply.classify(ReplyKind::Question));

    if let Err(error) = &result {
        warn!("[Question] Request {} failed: {}", ticket.0, error);
    }

    dispatch(QaAction::QuestionCompleted { ticket, result });
}
