//! Video question-answering forms
//!
//! Two independent forms share one state value:
//!
//! - **Video form**: submits a video URL for processing; a successful reply
//!   unlocks the question form
//! - **Question form**: asks a question about the processed video
//!
//! Each form moves through `Idle → Submitting → (Success | Error)`. Components
//! derive every class, style and disabled flag from [`QaState`], so the flows
//! are testable without a DOM.

pub mod orchestrator;
pub mod types;

pub use orchestrator::{submit_question, submit_video};
pub use types::*;
