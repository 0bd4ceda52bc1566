// Client-side access to the video Q&A backend
//
// This module provides:
// - Wire types for the `/process_video` and `/ask_question` replies
// - Transport error types
// - The `QaBackend` seam and its reqwest implementation

pub mod errors;
pub mod qa_client;
pub mod types;

// Re-export core types for easy access
pub use errors::{ClientError, ClientResult};
pub use qa_client::{QaBackend, QaClient};
pub use types::{ReplyKind, ReplyOutcome, ServerReply};
